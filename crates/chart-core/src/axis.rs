// File: crates/chart-core/src/axis.rs
// Summary: Axis model (orientation + ticks) and its scene-graph group.

use crate::curve::PathCommand;
use crate::geometry::Point;
use crate::scale::LinearScale;
use crate::scene::{Group, LineNode, Node, PathNode, TextAnchor, TextNode};
use crate::theme::Theme;

/// Length of tick marks and of the domain path's end caps.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
pub const LABEL_FONT_SIZE: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel offset along the axis.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn from_scale(scale: &LinearScale, orient: AxisOrient, count: usize) -> Self {
        let format = scale.tick_format(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick { value, offset: scale.map(value), label: format(value) })
            .collect();
        Self { orient, range: scale.range, ticks }
    }

    /// Scene group: the domain line with end caps, then one `tick` group per tick.
    pub fn to_group(&self, id: &str, theme: &Theme) -> Group {
        let (r0, r1) = self.range;
        let class = match self.orient {
            AxisOrient::Bottom => "axis axis--x",
            AxisOrient::Left => "axis axis--y",
        };
        let domain = match self.orient {
            AxisOrient::Bottom => vec![
                PathCommand::MoveTo(Point::new(r0, TICK_SIZE)),
                PathCommand::LineTo(Point::new(r0, 0.0)),
                PathCommand::LineTo(Point::new(r1, 0.0)),
                PathCommand::LineTo(Point::new(r1, TICK_SIZE)),
            ],
            AxisOrient::Left => vec![
                PathCommand::MoveTo(Point::new(-TICK_SIZE, r0)),
                PathCommand::LineTo(Point::new(0.0, r0)),
                PathCommand::LineTo(Point::new(0.0, r1)),
                PathCommand::LineTo(Point::new(-TICK_SIZE, r1)),
            ],
        };

        let mut group = Group::new().with_id(id).with_class(class);
        group.push(Node::Path(PathNode {
            class: Some("domain".into()),
            commands: domain,
            stroke: theme.axis_line,
            stroke_width: 1.0,
            fill: None,
        }));

        for tick in &self.ticks {
            let (translate, line_to, label) = match self.orient {
                AxisOrient::Bottom => (
                    Point::new(tick.offset, 0.0),
                    Point::new(0.0, TICK_SIZE),
                    TextNode {
                        at: Point::new(0.0, TICK_SIZE + TICK_PADDING),
                        text: tick.label.clone(),
                        anchor: TextAnchor::Middle,
                        dy_em: 0.71,
                        fill: theme.axis_label,
                        font_size: LABEL_FONT_SIZE,
                    },
                ),
                AxisOrient::Left => (
                    Point::new(0.0, tick.offset),
                    Point::new(-TICK_SIZE, 0.0),
                    TextNode {
                        at: Point::new(-(TICK_SIZE + TICK_PADDING), 0.0),
                        text: tick.label.clone(),
                        anchor: TextAnchor::End,
                        dy_em: 0.32,
                        fill: theme.axis_label,
                        font_size: LABEL_FONT_SIZE,
                    },
                ),
            };
            let mut tick_group = Group::new().with_class("tick").translated(translate);
            tick_group.push(Node::Line(LineNode { from: Point::default(), to: line_to, stroke: theme.axis_line }));
            tick_group.push(Node::Text(label));
            group.push(Node::Group(tick_group));
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_follow_the_scale() {
        let scale = LinearScale::new((0.0, 1.0), (300.0, 0.0));
        let axis = Axis::from_scale(&scale, AxisOrient::Left, 10);
        assert_eq!(axis.ticks.len(), 11);
        assert_eq!(axis.ticks[0].offset, 300.0);
        assert_eq!(axis.ticks[10].offset, 0.0);
        assert_eq!(axis.ticks[5].label, "0.5");
    }

    #[test]
    fn group_has_domain_and_tick_children() {
        let scale = LinearScale::new((0.0, 9.0), (0.0, 900.0));
        let group = Axis::from_scale(&scale, AxisOrient::Bottom, 10).to_group("x-axis", &Theme::light());
        assert_eq!(group.id.as_deref(), Some("x-axis"));
        assert_eq!(group.children.len(), 11);
        assert!(matches!(&group.children[0], Node::Path(p) if p.class.as_deref() == Some("domain")));
    }
}
