//! Capability cards shown on the About section

use crate::model::icon::Icon;
use crate::model::modal::ModalId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ImageProcessing,
    IntegratedData,
    WeatherPrediction,
    ClimateMonitoring,
    Visualizations,
}

impl Capability {
    /// All cards in display order
    pub fn all() -> [Capability; 5] {
        [
            Capability::ImageProcessing,
            Capability::IntegratedData,
            Capability::WeatherPrediction,
            Capability::ClimateMonitoring,
            Capability::Visualizations,
        ]
    }

    pub fn icon(&self) -> Icon {
        match self {
            Capability::ImageProcessing => Icon::Satellite,
            Capability::IntegratedData => Icon::Brain,
            Capability::WeatherPrediction => Icon::CloudRain,
            Capability::ClimateMonitoring => Icon::BarChart,
            Capability::Visualizations => Icon::Map,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Capability::ImageProcessing => "Advanced Image Processing",
            Capability::IntegratedData => "Integrated Data Analysis",
            Capability::WeatherPrediction => "Weather Event Prediction",
            Capability::ClimateMonitoring => "Climate Change Monitoring",
            Capability::Visualizations => "Dynamic Visualizations",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Capability::ImageProcessing => {
                "Utilizes convolutional neural networks (CNNs) to analyze satellite imagery, \
                 weather radar, and infrared data, extracting crucial patterns and indicators \
                 of climate change."
            }
            Capability::IntegratedData => {
                "Combines traditional climate variables with processed visual data to create \
                 comprehensive climate models, detecting correlations between different \
                 environmental factors."
            }
            Capability::WeatherPrediction => {
                "Forecasts both short-term weather conditions and long-term climate trends, \
                 including extreme events like storms, floods, heatwaves, and droughts."
            }
            Capability::ClimateMonitoring => {
                "Tracks and analyzes climate shifts over time, providing insights into \
                 temperature changes, rainfall patterns, and the impact of human activities."
            }
            Capability::Visualizations => {
                "Presents predictions through interactive maps and visualizations, overlaying \
                 satellite imagery with temperature models and precipitation forecasts."
            }
        }
    }

    /// The detail dialog this card opens, if any
    pub fn detail_modal(&self) -> Option<ModalId> {
        match self {
            Capability::ImageProcessing => Some(ModalId::ImageProcessing),
            Capability::IntegratedData => Some(ModalId::IntegratedData),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_two_cards_open_modals() {
        let with_modal: Vec<Capability> = Capability::all()
            .into_iter()
            .filter(|c| c.detail_modal().is_some())
            .collect();
        assert_eq!(
            with_modal,
            vec![Capability::ImageProcessing, Capability::IntegratedData]
        );
    }

    #[test]
    fn test_card_titles_match_modal_titles() {
        for capability in Capability::all() {
            if let Some(modal) = capability.detail_modal() {
                assert_eq!(capability.title(), modal.title());
            }
        }
    }
}
