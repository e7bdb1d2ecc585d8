//! Two-input, two-output control loop with decoupling compensation.
//!
//! Two drug infusions ("Nitroprusside", "Dopamine") are controlled by
//! `G_c1` and `G_c2`. The decouplers `D_21` and `D_12` cancel the
//! cross-coupling of the process, whose direct paths are `G_11` and `G_22`
//! and whose interaction paths are `G_12` and `G_21`. The measured outputs
//! "MAP" and "CO" are fed back to the input sums with negative sign.
//!
//! All coordinates are hand-placed data-space literals.

use std::rc::Rc;

use log::debug;

use blockwire_core::{
    color::Color,
    draw::{BendOrder, FontWeight, HorizontalAlign, TextDefinition, VerticalAlign, ZOrder},
    geometry::{Point, Size},
};

use crate::{
    canvas::Canvas,
    error::BlockwireError,
    scene::{Scene, SceneBuilder, Styles},
};

/// Visible x-range of the figure.
pub const X_RANGE: (f32, f32) = (-2.0, 19.0);
/// Visible y-range of the figure.
pub const Y_RANGE: (f32, f32) = (0.0, 11.0);
/// Figure width and height in inches.
pub const FIGURE_SIZE: (f32, f32) = (16.0, 10.0);

/// Height of the upper signal path.
pub const Y_TOP: f32 = 8.5;
/// Height of the lower signal path.
pub const Y_BOTTOM: f32 = 2.5;

/// Offset from a signal line to the lower edge of a block sitting on it.
const BLOCK_DROP: f32 = 0.5;
/// Offset of a connector ending on the top or bottom of a sum node.
const SUM_PORT: f32 = 0.2;
/// Raise of a sign annotation above its line.
const SIGN_RAISE: f32 = 0.3;
/// Offset of a sign annotation next to a vertical input.
const SIGN_SIDE: f32 = 0.5;
/// Drop of the `M_2` annotation below its line.
const SIGNAL_DROP: f32 = 0.4;

const INPUT_FONT_SIZE: f32 = 14.0;
const SIGN_FONT_SIZE: f32 = 12.0;
const SIGNAL_FONT_SIZE: f32 = 14.0;

const TAKE_OFF_RADIUS: f32 = 0.08;
const JUNCTION_RADIUS: f32 = 0.15;
const JUNCTION_COLOR: &str = "#b22222";
const COUPLING_COLOR: &str = "darkred";

/// Label styles of the figure.
struct LabelStyles {
    input: Rc<TextDefinition>,
    heading: Rc<TextDefinition>,
    sign: Rc<TextDefinition>,
    signal: Rc<TextDefinition>,
    coupling: Rc<TextDefinition>,
}

impl LabelStyles {
    fn new(styles: &Styles) -> Result<Self, BlockwireError> {
        let mut input = styles.text(INPUT_FONT_SIZE, FontWeight::Bold);
        input.set_horizontal_align(HorizontalAlign::Right);
        input.set_vertical_align(VerticalAlign::Center);

        let mut coupling = styles.text(SIGN_FONT_SIZE, FontWeight::Normal);
        coupling.set_color(Some(parse_color(COUPLING_COLOR)?));

        Ok(Self {
            input: Rc::new(input),
            heading: Rc::new(styles.text(INPUT_FONT_SIZE, FontWeight::Bold)),
            sign: Rc::new(styles.text(SIGN_FONT_SIZE, FontWeight::Normal)),
            signal: Rc::new(styles.text(SIGNAL_FONT_SIZE, FontWeight::Normal)),
            coupling: Rc::new(coupling),
        })
    }
}

fn parse_color(color: &str) -> Result<Color, BlockwireError> {
    Color::new(color).map_err(BlockwireError::Config)
}

fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Builds the decoupled control loop.
///
/// # Errors
///
/// Returns an error only if `styles` cannot produce a valid scene, such as a
/// non-positive font size.
///
/// # Examples
///
/// ```
/// # use blockwire::figures::decoupled_control;
/// # use blockwire::scene::Styles;
/// let scene = decoupled_control(Styles::default()).unwrap();
/// assert_eq!(scene.summary().blocks, 8);
/// assert_eq!(scene.summary().sum_nodes, 6);
/// assert_eq!(scene.routes().count(), 2);
/// ```
pub fn decoupled_control(styles: Styles) -> Result<Scene, BlockwireError> {
    let canvas = Canvas::new(
        X_RANGE,
        Y_RANGE,
        Size::new(FIGURE_SIZE.0, FIGURE_SIZE.1),
    )?;
    let labels = LabelStyles::new(&styles)?;
    let mut scene = SceneBuilder::new(canvas, styles);

    // Inputs and error sums
    scene.label("Nitroprusside", pt(0.5, Y_TOP), &labels.input)?;
    scene.arrow(pt(0.6, Y_TOP), pt(1.8, Y_TOP))?;
    let error_top = scene.sum("E1", pt(2.0, Y_TOP))?;
    scene.label("+", pt(1.6, Y_TOP + SIGN_RAISE), &labels.sign)?;

    scene.label("Dopamine", pt(0.5, Y_BOTTOM), &labels.input)?;
    scene.arrow(pt(0.6, Y_BOTTOM), pt(1.8, Y_BOTTOM))?;
    let error_bottom = scene.sum("E2", pt(2.0, Y_BOTTOM))?;
    scene.label("+", pt(1.6, Y_BOTTOM + SIGN_RAISE), &labels.sign)?;

    // Controllers
    let gc1_out = scene.block("Gc1", pt(3.0, Y_TOP - BLOCK_DROP), "$G_{c1}$")?;
    let gc2_out = scene.block("Gc2", pt(3.0, Y_BOTTOM - BLOCK_DROP), "$G_{c2}$")?;
    let gc1_in = scene.layout().left_center("Gc1")?;
    let gc2_in = scene.layout().left_center("Gc2")?;
    scene.arrow(pt(error_top.x() + SUM_PORT, Y_TOP), gc1_in)?;
    scene.arrow(pt(error_bottom.x() + SUM_PORT, Y_BOTTOM), gc2_in)?;

    // Decoupler sums
    let u1 = scene.sum("U1", pt(8.5, Y_TOP))?;
    let u2 = scene.sum("U2", pt(7.5, Y_BOTTOM))?;
    scene.arrow(gc1_out, scene.layout().left_center("U1")?)?;
    scene.arrow(gc2_out, scene.layout().left_center("U2")?)?;

    scene.label("$M_1$", pt(5.0, Y_TOP + SIGN_RAISE), &labels.signal)?;
    scene.label("$M_2$", pt(5.3, Y_BOTTOM - SIGNAL_DROP), &labels.signal)?;
    scene.label("+", pt(8.1, Y_TOP + SIGN_RAISE), &labels.sign)?;
    scene.label("+", pt(7.1, Y_BOTTOM + SIGN_RAISE), &labels.sign)?;

    // Decouplers
    let d21_out = scene.block("D21", pt(5.5, 6.0), "$D_{21}$")?;
    let d12_out = scene.block("D12", pt(5.5, 4.0), "$D_{12}$")?;

    scene.ortho_arrow(
        pt(5.0, Y_TOP),
        scene.layout().left_center("D21")?,
        BendOrder::VerticalFirst,
    )?;
    scene.ortho_arrow(
        d21_out,
        pt(u2.x(), Y_BOTTOM + SUM_PORT),
        BendOrder::HorizontalFirst,
    )?;
    scene.label("+", pt(u2.x() + SUM_PORT, Y_BOTTOM + SIGN_SIDE), &labels.sign)?;

    scene.ortho_arrow(
        pt(5.3, Y_BOTTOM),
        scene.layout().left_center("D12")?,
        BendOrder::VerticalFirst,
    )?;
    scene.ortho_arrow(
        d12_out,
        pt(u1.x(), Y_TOP - SUM_PORT),
        BendOrder::HorizontalFirst,
    )?;
    scene.label("+", pt(u1.x() + SUM_PORT, Y_TOP - SIGN_SIDE), &labels.sign)?;

    // Process
    let g11_out = scene.block("G11", pt(11.0, Y_TOP - BLOCK_DROP), "$G_{11}$")?;
    let g22_out = scene.block("G22", pt(11.0, Y_BOTTOM - BLOCK_DROP), "$G_{22}$")?;
    scene.arrow(pt(u1.x() + SUM_PORT, Y_TOP), scene.layout().left_center("G11")?)?;
    scene.arrow(pt(u2.x() + SUM_PORT, Y_BOTTOM), scene.layout().left_center("G22")?)?;

    // Interaction
    let g12_out = scene.block("G12", pt(11.0, 6.0), "$G_{12}$")?;
    let g21_out = scene.block("G21", pt(11.0, 4.0), "$G_{21}$")?;
    scene.ortho_arrow(
        pt(9.5, Y_TOP),
        scene.layout().left_center("G21")?,
        BendOrder::VerticalFirst,
    )?;
    scene.ortho_arrow(
        pt(9.0, Y_BOTTOM),
        scene.layout().left_center("G12")?,
        BendOrder::VerticalFirst,
    )?;

    // Output sums
    let y1 = scene.sum("Y1", pt(14.5, Y_TOP))?;
    let y2 = scene.sum("Y2", pt(14.5, Y_BOTTOM))?;
    scene.arrow(g11_out, scene.layout().left_center("Y1")?)?;
    scene.arrow(g22_out, scene.layout().left_center("Y2")?)?;
    scene.label("+", pt(14.1, Y_TOP + SIGN_RAISE), &labels.sign)?;
    scene.label("+", pt(14.1, Y_BOTTOM + SIGN_RAISE), &labels.sign)?;

    scene.ortho_arrow(
        g12_out,
        scene.layout().bottom_center("Y1")?,
        BendOrder::HorizontalFirst,
    )?;
    scene.label("+", pt(y1.x() + SUM_PORT, Y_TOP - SIGN_SIDE), &labels.sign)?;
    scene.label("b", pt(14.7, 7.2), &labels.coupling)?;

    scene.ortho_arrow(
        g21_out,
        scene.layout().top_center("Y2")?,
        BendOrder::HorizontalFirst,
    )?;
    scene.label("+", pt(y2.x() + SUM_PORT, Y_BOTTOM + SIGN_SIDE), &labels.sign)?;
    scene.label("a", pt(14.7, 3.8), &labels.coupling)?;

    // Outputs
    scene.arrow(scene.layout().right_center("Y1")?, pt(17.5, Y_TOP))?;
    scene.label("MAP", pt(17.0, Y_TOP + SIGN_RAISE), &labels.heading)?;
    scene.arrow(scene.layout().right_center("Y2")?, pt(17.5, Y_BOTTOM))?;
    scene.label("CO", pt(17.0, Y_BOTTOM + SIGN_RAISE), &labels.heading)?;

    // Cross feedback: MAP to the lower error sum, CO to the upper one
    scene.route(
        &[
            pt(16.5, Y_TOP),
            pt(16.5, 10.5),
            pt(1.0, 10.5),
            pt(1.0, 0.5),
            pt(error_bottom.x(), 0.5),
            scene.layout().bottom_center("E2")?,
        ],
        true,
    )?;
    scene.label("-", pt(2.3, Y_BOTTOM - SIGN_SIDE), &labels.heading)?;

    scene.route(
        &[
            pt(16.0, Y_BOTTOM),
            pt(16.0, 0.2),
            pt(1.5, 0.2),
            pt(1.5, 10.0),
            pt(error_top.x(), 10.0),
            scene.layout().top_center("E1")?,
        ],
        true,
    )?;
    scene.label("-", pt(2.3, Y_TOP + SIGN_SIDE), &labels.heading)?;

    // Junction dots
    let junction = parse_color(JUNCTION_COLOR)?;
    scene.dot(y1, JUNCTION_RADIUS, junction, ZOrder::OVERLAY)?;
    scene.dot(y2, JUNCTION_RADIUS, junction, ZOrder::OVERLAY)?;
    for take_off in [
        pt(5.0, Y_TOP),
        pt(5.3, Y_BOTTOM),
        pt(9.5, Y_TOP),
        pt(9.0, Y_BOTTOM),
    ] {
        scene.dot(take_off, TAKE_OFF_RADIUS, Color::default(), ZOrder::PATCH)?;
    }

    let scene = scene.build();
    debug!(summary:? = scene.summary(); "Decoupled control figure built");
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use blockwire_core::draw::{ConnectorKind, markup_to_plain};

    use super::*;

    fn scene() -> Scene {
        decoupled_control(Styles::default()).unwrap()
    }

    #[test]
    fn test_block_positions() {
        let scene = scene();
        let expected = [
            ("$G_{c1}$", 3.0, 8.0),
            ("$G_{c2}$", 3.0, 2.0),
            ("$D_{21}$", 5.5, 6.0),
            ("$D_{12}$", 5.5, 4.0),
            ("$G_{11}$", 11.0, 8.0),
            ("$G_{22}$", 11.0, 2.0),
            ("$G_{12}$", 11.0, 6.0),
            ("$G_{21}$", 11.0, 4.0),
        ];

        let blocks: Vec<_> = scene.blocks().collect();
        assert_eq!(blocks.len(), expected.len());
        for (block, (label, x, y)) in blocks.iter().zip(expected) {
            assert_eq!(block.inner().label(), label);
            assert_approx_eq!(f32, block.position().x(), x);
            assert_approx_eq!(f32, block.position().y(), y);
            assert_eq!(block.inner().definition().size(), Size::new(1.6, 1.0));
        }
    }

    #[test]
    fn test_sum_positions() {
        let scene = scene();
        let centers: Vec<Point> = scene.sum_nodes().map(|sum| sum.position()).collect();
        assert_eq!(
            centers,
            vec![
                pt(2.0, Y_TOP),
                pt(2.0, Y_BOTTOM),
                pt(8.5, Y_TOP),
                pt(7.5, Y_BOTTOM),
                pt(14.5, Y_TOP),
                pt(14.5, Y_BOTTOM),
            ]
        );
        assert!(
            scene
                .sum_nodes()
                .all(|sum| sum.inner().definition().radius() == 0.2)
        );
    }

    #[test]
    fn test_label_texts() {
        let scene = scene();
        let count = |text: &str| {
            scene
                .labels()
                .filter(|label| label.inner().content() == text)
                .count()
        };

        assert_eq!(count("Nitroprusside"), 1);
        assert_eq!(count("Dopamine"), 1);
        assert_eq!(count("MAP"), 1);
        assert_eq!(count("CO"), 1);
        assert_eq!(count("+"), 10);
        assert_eq!(count("-"), 2);
        assert_eq!(count("a"), 1);
        assert_eq!(count("b"), 1);
        assert_eq!(scene.summary().labels, 20);

        let signals: Vec<String> = scene
            .labels()
            .map(|label| markup_to_plain(label.inner().content()))
            .filter(|text| text.starts_with('M'))
            .collect();
        assert_eq!(signals, vec!["M1", "M2", "MAP"]);
    }

    #[test]
    fn test_input_labels_are_right_aligned() {
        let scene = scene();
        let input = scene
            .labels()
            .find(|label| label.inner().content() == "Nitroprusside")
            .unwrap();
        assert_eq!(input.position(), pt(0.5, Y_TOP));
        assert_eq!(
            input.inner().definition().horizontal_align(),
            HorizontalAlign::Right
        );
    }

    #[test]
    fn test_feedback_routes() {
        let scene = scene();
        let routes: Vec<_> = scene.routes().collect();
        assert_eq!(routes.len(), 2);

        for route in &routes {
            let segments = route.segments();
            assert_eq!(segments.len(), 5);
            assert!(route.has_arrowhead());
            assert!(segments.iter().all(|segment| segment.is_axis_aligned()));
        }

        let map_loop = routes[0].segments();
        let last = map_loop.last().unwrap();
        assert_eq!(last.start(), pt(2.0, 0.5));
        assert_approx_eq!(f32, last.end().y(), Y_BOTTOM - 0.2, epsilon = 0.0001);

        let co_loop = routes[1].segments();
        let last = co_loop.last().unwrap();
        assert_eq!(last.start(), pt(2.0, 10.0));
        assert_approx_eq!(f32, last.end().y(), Y_TOP + 0.2, epsilon = 0.0001);
    }

    #[test]
    fn test_decoupler_connectors() {
        let scene = scene();
        let orthogonal: Vec<_> = scene
            .connectors()
            .filter(|connector| matches!(connector.kind(), ConnectorKind::Orthogonal { .. }))
            .collect();
        assert_eq!(orthogonal.len(), 8);

        // M1 take-off into D21: down first, then right into the block
        let segments = orthogonal[0].segments();
        assert_eq!(segments[0].start(), pt(5.0, Y_TOP));
        assert_eq!(segments[0].end(), pt(5.0, 6.5));
        assert_eq!(segments[1].end(), pt(5.5, 6.5));
        assert!(segments[1].has_arrowhead());
    }

    #[test]
    fn test_summary() {
        let summary = scene().summary();
        assert_eq!(summary.blocks, 8);
        assert_eq!(summary.sum_nodes, 6);
        assert_eq!(summary.dots, 6);
        assert_eq!(summary.connectors, 22);
        assert_eq!(summary.arrows, 22);
    }

    #[test]
    fn test_dot_priorities() {
        let scene = scene();
        let overlay = scene
            .dots()
            .filter(|dot| dot.inner().definition().z_order() == ZOrder::OVERLAY)
            .count();
        let patches = scene
            .dots()
            .filter(|dot| dot.inner().definition().z_order() == ZOrder::PATCH)
            .count();
        assert_eq!(overlay, 2);
        assert_eq!(patches, 4);
    }
}
