//! Minimal SVG document writer
//!
//! Elements keep their attributes in insertion order and numbers are always
//! printed with two decimals, so the same tree always serializes to the same
//! bytes. Non-finite numbers are refused here, which is where a broken
//! generator surfaces as `RenderFailure`.

use super::geometry::Point;
use crate::error::{NexusError, Result};

/// Format a coordinate or length; `-0.00` is normalized to `0.00`
pub fn fmt_num(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(NexusError::RenderFailure(format!(
            "non-finite value {} in generated geometry",
            value
        )));
    }
    let s = format!("{:.2}", value);
    Ok(if s == "-0.00" { "0.00".to_string() } else { s })
}

/// `x1,y1 x2,y2 ...` for polygon and polyline
pub fn points_attr(points: &[Point]) -> Result<String> {
    let mut out = String::with_capacity(points.len() * 14);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&fmt_num(p.x)?);
        out.push(',');
        out.push_str(&fmt_num(p.y)?);
    }
    Ok(out)
}

fn degenerate(what: &str, value: f64) -> NexusError {
    NexusError::RenderFailure(format!("{} {} is not positive", what, value))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    /// Numeric attribute, validated and formatted
    pub fn num(self, key: &'static str, value: f64) -> Result<Self> {
        Ok(self.attr(key, fmt_num(value)?))
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_to(out),
                Node::Text(text) => out.push_str(&escape(text)),
            }
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// A drawable produced by a generator, before styling
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle { center: Point, radius: f64 },
    Rect { origin: Point, width: f64, height: f64 },
    Polygon(Vec<Point>),
    Polyline(Vec<Point>),
    Line { from: Point, to: Point },
    Quadratic { from: Point, control: Point, to: Point },
}

impl Primitive {
    pub fn to_element(&self) -> Result<Element> {
        match self {
            Primitive::Circle { radius, .. } if *radius <= 0.0 => Err(degenerate("circle radius", *radius)),
            Primitive::Rect { width, height, .. } if *width < 0.0 || *height < 0.0 => {
                Err(degenerate("rect extent", width.min(*height)))
            }
            Primitive::Circle { center, radius } => Element::new("circle")
                .num("cx", center.x)?
                .num("cy", center.y)?
                .num("r", *radius),
            Primitive::Rect { origin, width, height } => Element::new("rect")
                .num("x", origin.x)?
                .num("y", origin.y)?
                .num("width", *width)?
                .num("height", *height),
            Primitive::Polygon(pts) => Ok(Element::new("polygon").attr("points", points_attr(pts)?)),
            Primitive::Polyline(pts) => Ok(Element::new("polyline").attr("points", points_attr(pts)?)),
            Primitive::Line { from, to } => Element::new("line")
                .num("x1", from.x)?
                .num("y1", from.y)?
                .num("x2", to.x)?
                .num("y2", to.y),
            Primitive::Quadratic { from, control, to } => {
                let d = format!(
                    "M{},{} Q{},{} {},{}",
                    fmt_num(from.x)?,
                    fmt_num(from.y)?,
                    fmt_num(control.x)?,
                    fmt_num(control.y)?,
                    fmt_num(to.x)?,
                    fmt_num(to.y)?,
                );
                Ok(Element::new("path").attr("d", d))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(1.0).unwrap(), "1.00");
        assert_eq!(fmt_num(-0.001).unwrap(), "0.00");
        assert_eq!(fmt_num(12.345).unwrap(), "12.35");
        assert!(matches!(fmt_num(f64::NAN), Err(NexusError::RenderFailure(_))));
        assert!(fmt_num(f64::INFINITY).is_err());
    }

    #[test]
    fn test_element_serialization() {
        let el = Element::new("g")
            .attr("class", "a&b")
            .child(Element::new("circle").num("r", 2.0).unwrap())
            .child(Element::new("text").text("<hi>"));
        assert_eq!(
            el.to_markup(),
            r#"<g class="a&amp;b"><circle r="2.00"/><text>&lt;hi&gt;</text></g>"#
        );
        assert_eq!(el.get_attr("class"), Some("a&b"));
        assert_eq!(el.child_count(), 2);
    }

    #[test]
    fn test_primitive_elements() {
        let p = Primitive::Polygon(vec![Point::new(0.0, 1.0), Point::new(2.5, -3.0)]);
        assert_eq!(p.to_element().unwrap().to_markup(), r#"<polygon points="0.00,1.00 2.50,-3.00"/>"#);

        let q = Primitive::Quadratic {
            from: Point::new(0.0, 0.0),
            control: Point::new(1.0, 1.0),
            to: Point::new(2.0, 0.0),
        };
        assert_eq!(
            q.to_element().unwrap().to_markup(),
            r#"<path d="M0.00,0.00 Q1.00,1.00 2.00,0.00"/>"#
        );
    }

    #[test]
    fn test_non_finite_primitive_fails() {
        let p = Primitive::Circle {
            center: Point::new(f64::NAN, 0.0),
            radius: 1.0,
        };
        assert!(matches!(p.to_element(), Err(NexusError::RenderFailure(_))));
    }

    #[test]
    fn test_negative_extent_fails() {
        let circle = Primitive::Circle {
            center: Point::new(200.0, 200.0),
            radius: -70.99,
        };
        assert!(matches!(circle.to_element(), Err(NexusError::RenderFailure(_))));
        let rect = Primitive::Rect {
            origin: Point::new(0.0, 0.0),
            width: 4.0,
            height: -1.0,
        };
        assert!(rect.to_element().is_err());
    }
}
