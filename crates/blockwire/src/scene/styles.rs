//! Element style presets derived from the style configuration.

use std::rc::Rc;

use blockwire_core::{
    color::Color,
    draw::{
        BlockDefinition, ConnectorDefinition, FontWeight, StrokeDefinition, SumNodeDefinition,
        TextDefinition,
    },
};

use crate::{config::StyleConfig, error::BlockwireError};

/// Shared definitions used by a [`SceneBuilder`](crate::scene::SceneBuilder).
///
/// Blocks, sum nodes and connectors all share one stroke built from the
/// configured line width, cap and join. Labels share the configured font
/// family.
#[derive(Debug, Clone)]
pub struct Styles {
    block: Rc<BlockDefinition>,
    sum_node: Rc<SumNodeDefinition>,
    connector: Rc<ConnectorDefinition>,
    font_family: String,
}

impl Styles {
    /// Builds the presets from a style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Config`] if the line width, cap or join is invalid.
    pub fn from_config(config: &StyleConfig) -> Result<Self, BlockwireError> {
        let mut stroke = StrokeDefinition::new(
            Color::default(),
            config.line_width().map_err(BlockwireError::Config)?,
        );
        stroke.set_cap(config.line_cap().map_err(BlockwireError::Config)?);
        stroke.set_join(config.line_join().map_err(BlockwireError::Config)?);
        let stroke = Rc::new(stroke);

        let mut block = BlockDefinition::new();
        let mut block_text = (**block.text()).clone();
        block_text.set_font_family(config.font_family());
        block.set_text(Rc::new(block_text));
        block.set_stroke(Rc::clone(&stroke));

        let mut sum_node = SumNodeDefinition::new();
        sum_node.set_stroke(Rc::clone(&stroke));

        Ok(Self {
            block: Rc::new(block),
            sum_node: Rc::new(sum_node),
            connector: Rc::new(ConnectorDefinition::new(stroke)),
            font_family: config.font_family().to_string(),
        })
    }

    pub fn block(&self) -> &Rc<BlockDefinition> {
        &self.block
    }

    pub fn sum_node(&self) -> &Rc<SumNodeDefinition> {
        &self.sum_node
    }

    pub fn connector(&self) -> &Rc<ConnectorDefinition> {
        &self.connector
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns a label style in the configured font family.
    ///
    /// Alignment, color and priority keep their defaults and can be adjusted
    /// before the definition is shared.
    pub fn text(&self, font_size: f32, weight: FontWeight) -> TextDefinition {
        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(font_size);
        text.set_weight(weight);
        text
    }
}

impl Default for Styles {
    fn default() -> Self {
        let stroke = Rc::new(StrokeDefinition::default());

        let mut block = BlockDefinition::new();
        block.set_stroke(Rc::clone(&stroke));
        let mut sum_node = SumNodeDefinition::new();
        sum_node.set_stroke(Rc::clone(&stroke));

        Self {
            block: Rc::new(block),
            sum_node: Rc::new(sum_node),
            connector: Rc::new(ConnectorDefinition::new(stroke)),
            font_family: StyleConfig::DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use blockwire_core::draw::StrokeCap;

    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_styles_from_default_config() {
        let styles = Styles::from_config(AppConfig::default().style()).unwrap();
        assert_eq!(styles.font_family(), "DejaVu Sans");
        assert_eq!(styles.connector().stroke().width(), 1.5);
        assert_eq!(styles.block().text().font_family(), "DejaVu Sans");
        assert_eq!(styles.sum_node().radius(), 0.2);
    }

    #[test]
    fn test_styles_share_configured_stroke() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            font_family = "serif"
            line_width = 2.0
            line_cap = "round"
            "#,
        )
        .unwrap();
        let styles = Styles::from_config(config.style()).unwrap();

        assert_eq!(styles.block().stroke().width(), 2.0);
        assert_eq!(styles.sum_node().stroke().cap(), StrokeCap::Round);
        assert_eq!(styles.connector().stroke().cap(), StrokeCap::Round);
        assert_eq!(styles.block().text().font_family(), "serif");

        let label = styles.text(12.0, FontWeight::Bold);
        assert_eq!(label.font_family(), "serif");
        assert_eq!(label.weight(), FontWeight::Bold);
    }

    #[test]
    fn test_styles_reject_bad_line_width() {
        let config: AppConfig = toml::from_str("[style]\nline_width = 0.0\n").unwrap();
        let result = Styles::from_config(config.style());
        assert!(matches!(result, Err(BlockwireError::Config(_))));
    }
}
