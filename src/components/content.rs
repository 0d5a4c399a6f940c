//! Fixed text for the detail dialogs
//!
//! Both panels take no input; the output never changes.

use crate::model::ModalId;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn heading(lines: &mut Vec<Line<'static>>, text: &'static str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
}

fn paragraph(lines: &mut Vec<Line<'static>>, text: &'static str) {
    lines.push(Line::from(Span::styled(text, Style::default().fg(Color::Gray))));
}

fn bullets(lines: &mut Vec<Line<'static>>, items: &[&'static str], color: Color) {
    for item in items {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(color)),
            Span::styled(*item, Style::default().fg(color)),
        ]));
    }
}

fn callout(lines: &mut Vec<Line<'static>>, title: &'static str, color: Color) {
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("▌ ", Style::default().fg(color)),
        Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ]));
}

pub fn image_processing_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    heading(&mut lines, "Satellite Imagery Analysis");
    paragraph(
        &mut lines,
        "High-resolution images taken from satellites are used to monitor large-scale \
         environmental conditions. These images capture details such as cloud formation, \
         vegetation health, temperature, and soil moisture. Our CNNs process these images to \
         detect patterns indicating early signs of climate change, including:",
    );
    bullets(
        &mut lines,
        &[
            "Deforestation patterns and rates",
            "Ocean surface temperature variations",
            "Ice sheet melting progression",
            "Urban development impact on local climate",
        ],
        Color::Gray,
    );

    heading(&mut lines, "Weather Radar Processing");
    paragraph(
        &mut lines,
        "Weather radar systems collect data on precipitation, storm intensity, wind patterns, \
         and atmospheric conditions. Our AI analyzes this data to:",
    );
    bullets(
        &mut lines,
        &[
            "Track specific weather events in real-time",
            "Predict storm evolution and intensity",
            "Monitor trends in extreme weather events",
            "Provide short-term weather forecasting",
        ],
        Color::Gray,
    );

    heading(&mut lines, "Infrared Data Analysis");
    paragraph(
        &mut lines,
        "Infrared imagery enables the analysis of heat patterns on Earth's surface, crucial for:",
    );
    bullets(
        &mut lines,
        &[
            "Detecting temperature anomalies",
            "Identifying urban heat islands",
            "Monitoring ocean temperature changes",
            "Tracking volcanic activity and heat emissions",
        ],
        Color::Gray,
    );

    callout(&mut lines, "Technical Implementation", Color::White);
    paragraph(
        &mut lines,
        "Our system employs state-of-the-art CNNs optimized for environmental data processing, \
         achieving 92% accuracy in pattern recognition and anomaly detection across all image types.",
    );

    lines
}

pub fn integrated_data_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    heading(&mut lines, "Data Integration Framework");
    paragraph(
        &mut lines,
        "Our integrated analysis combines traditional climate variables with processed visual \
         data to create comprehensive models of climate patterns. This fusion of data sources \
         enables deeper insights and more accurate predictions.",
    );

    callout(&mut lines, "Traditional Data Sources", Color::White);
    bullets(
        &mut lines,
        &[
            "Temperature records",
            "Precipitation measurements",
            "Humidity levels",
            "Wind patterns",
            "Atmospheric pressure",
        ],
        Color::Gray,
    );

    callout(&mut lines, "Visual Data Sources", Color::White);
    bullets(
        &mut lines,
        &[
            "Satellite imagery",
            "Radar data",
            "Infrared scans",
            "Aerial photography",
            "Real-time sensor feeds",
        ],
        Color::Gray,
    );

    heading(&mut lines, "Climate Model Generation");
    paragraph(
        &mut lines,
        "Our advanced models represent various atmospheric, oceanic, and land factors. By \
         combining historical temperature data with processed satellite imagery, we can predict \
         regional climate evolution under different scenarios.",
    );
    callout(&mut lines, "Model Accuracy", Color::Green);
    lines.push(Line::from(Span::styled(
        "Integration of multiple data sources has improved our prediction accuracy by 35% \
         compared to traditional single-source models.",
        Style::default().fg(Color::Green),
    )));

    heading(&mut lines, "Correlation Detection");
    paragraph(
        &mut lines,
        "Statistical techniques identify relationships between variables, such as:",
    );
    bullets(
        &mut lines,
        &[
            "Sea surface temperatures and tropical storm frequency",
            "Forest cover changes and carbon dioxide levels",
            "Urban development and local temperature anomalies",
            "Precipitation patterns and vegetation health",
        ],
        Color::Gray,
    );

    callout(&mut lines, "Implementation Highlights", Color::Blue);
    bullets(
        &mut lines,
        &[
            "Real-time data processing and integration",
            "Advanced statistical correlation analysis",
            "Machine learning-based pattern recognition",
            "Automated anomaly detection",
        ],
        Color::Blue,
    );

    lines
}

/// Body text of a detail dialog
pub fn modal_content(which: ModalId) -> Vec<Line<'static>> {
    match which {
        ModalId::ImageProcessing => image_processing_content(),
        ModalId::IntegratedData => integrated_data_content(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_image_processing_sections() {
        let text = plain(&image_processing_content());
        assert!(text.contains("Satellite Imagery Analysis"));
        assert!(text.contains("Weather Radar Processing"));
        assert!(text.contains("Infrared Data Analysis"));
        assert!(text.contains("92% accuracy"));
    }

    #[test]
    fn test_integrated_data_sections() {
        let text = plain(&integrated_data_content());
        assert!(text.contains("Data Integration Framework"));
        assert!(text.contains("Aerial photography"));
        assert!(text.contains("35%"));
        assert!(text.contains("Automated anomaly detection"));
    }

    #[test]
    fn test_content_is_fixed() {
        assert_eq!(
            modal_content(ModalId::ImageProcessing),
            modal_content(ModalId::ImageProcessing)
        );
    }
}
