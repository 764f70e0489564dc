//! Visual tree produced by the views and its SVG serialization.
//!
//! Views compose a [`Scene`] of absolutely positioned primitives; the
//! rasterizer turns the SVG text into pixels. Angles for sectors run
//! clockwise from 12 o'clock, in degrees.

use std::fmt::Write;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// Filled pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub fill: Color,
}

/// Stroked progress arc starting at 12 o'clock, drawn with a dash offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub stroke: Stroke,
    pub circumference: f64,
    pub dash_offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    /// Baseline.
    pub y: f64,
    pub content: String,
    pub size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub anchor: Anchor,
    pub italic: bool,
    pub letter_spacing: f64,
    pub strikethrough: bool,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>, size: f64) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            size,
            weight: FontWeight::Regular,
            color: crate::color::palette::TEXT,
            anchor: Anchor::Start,
            italic: false,
            letter_spacing: 0.0,
            strikethrough: false,
        }
    }

    pub fn centered(x: f64, y: f64, content: impl Into<String>, size: f64) -> Self {
        Self {
            anchor: Anchor::Middle,
            ..Self::new(x, y, content, size)
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn strikethrough(mut self, on: bool) -> Self {
        self.strikethrough = on;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect(Rect),
    Circle(Circle),
    Sector(Sector),
    Arc(Arc),
    Polyline(Polyline),
    Text(Text),
    Group { opacity: f64, children: Vec<Node> },
}

impl Node {
    pub fn dot(cx: f64, cy: f64, r: f64, fill: Color) -> Self {
        Node::Circle(Circle {
            cx,
            cy,
            r,
            fill: Some(fill),
            stroke: None,
        })
    }

    pub fn ring(cx: f64, cy: f64, r: f64, stroke: Stroke) -> Self {
        Node::Circle(Circle {
            cx,
            cy,
            r,
            fill: None,
            stroke: Some(stroke),
        })
    }

    /// Visit this node and all descendants, depth first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        if let Node::Group { children, .. } = self {
            for child in children {
                child.walk(visit);
            }
        }
    }
}

/// A complete frame: background plus primitives in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.extend(nodes);
    }

    /// All text runs in paint order.
    pub fn texts(&self) -> Vec<&Text> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.walk(&mut |n| {
                if let Node::Text(t) = n {
                    out.push(t);
                }
            });
        }
        out
    }

    /// Number of primitives, counting group members but not groups.
    pub fn primitive_count(&self) -> usize {
        let mut count = 0;
        for node in &self.nodes {
            node.walk(&mut |n| {
                if !matches!(n, Node::Group { .. }) {
                    count += 1;
                }
            });
        }
        count
    }

    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self, font_family: &str) -> String {
        let mut svg = String::with_capacity(256 + self.nodes.len() * 96);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{family}">"#,
            w = self.width,
            h = self.height,
            family = escape(font_family),
        );
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{}" height="{}"{}/>"#,
            self.width,
            self.height,
            paint("fill", self.background),
        );
        for node in &self.nodes {
            write_node(&mut svg, node);
        }
        svg.push_str("</svg>");
        svg
    }
}

fn write_node(svg: &mut String, node: &Node) {
    match node {
        Node::Rect(r) => {
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}{}/>"#,
                num(r.x),
                num(r.y),
                num(r.width),
                num(r.height),
                num(r.radius),
                fill_attr(r.fill),
                stroke_attr(r.stroke),
            );
        }
        Node::Circle(c) => {
            let _ = write!(
                svg,
                r#"<circle cx="{}" cy="{}" r="{}"{}{}/>"#,
                num(c.cx),
                num(c.cy),
                num(c.r),
                fill_attr(c.fill),
                stroke_attr(c.stroke),
            );
        }
        Node::Sector(s) => write_sector(svg, s),
        Node::Arc(a) => {
            let _ = write!(
                svg,
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none"{stroke} stroke-linecap="round" stroke-dasharray="{len}" stroke-dashoffset="{off}" transform="rotate(-90 {cx} {cy})"/>"#,
                cx = num(a.cx),
                cy = num(a.cy),
                r = num(a.r),
                stroke = stroke_attr(Some(a.stroke)),
                len = num(a.circumference),
                off = num(a.dash_offset),
            );
        }
        Node::Polyline(p) => {
            let points = p
                .points
                .iter()
                .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                svg,
                r#"<polyline points="{}" fill="none"{} stroke-linecap="round" stroke-linejoin="round"/>"#,
                points,
                stroke_attr(Some(p.stroke)),
            );
        }
        Node::Text(t) => write_text(svg, t),
        Node::Group { opacity, children } => {
            let _ = write!(svg, r#"<g opacity="{}">"#, num(opacity.clamp(0.0, 1.0)));
            for child in children {
                write_node(svg, child);
            }
            svg.push_str("</g>");
        }
    }
}

fn write_sector(svg: &mut String, s: &Sector) {
    if s.sweep_deg <= 0.0 || s.r <= 0.0 {
        return;
    }
    if s.sweep_deg >= 360.0 {
        let _ = write!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            num(s.cx),
            num(s.cy),
            num(s.r),
            paint("fill", s.fill),
        );
        return;
    }

    let point = |deg: f64| {
        let rad = deg.to_radians();
        (s.cx + s.r * rad.sin(), s.cy - s.r * rad.cos())
    };
    let (x0, y0) = point(s.start_deg);
    let (x1, y1) = point(s.start_deg + s.sweep_deg);
    let large_arc = if s.sweep_deg > 180.0 { 1 } else { 0 };

    let _ = write!(
        svg,
        r#"<path d="M {cx} {cy} L {x0} {y0} A {r} {r} 0 {large} 1 {x1} {y1} Z"{fill}/>"#,
        cx = num(s.cx),
        cy = num(s.cy),
        x0 = num(x0),
        y0 = num(y0),
        r = num(s.r),
        large = large_arc,
        x1 = num(x1),
        y1 = num(y1),
        fill = paint("fill", s.fill),
    );
}

fn write_text(svg: &mut String, t: &Text) {
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" text-anchor="{}"{}"#,
        num(t.x),
        num(t.y),
        num(t.size),
        t.weight.value(),
        t.anchor.as_str(),
        paint("fill", t.color),
    );
    if t.italic {
        svg.push_str(r#" font-style="italic""#);
    }
    if t.letter_spacing != 0.0 {
        let _ = write!(svg, r#" letter-spacing="{}""#, num(t.letter_spacing));
    }
    if t.strikethrough {
        svg.push_str(r#" text-decoration="line-through""#);
    }
    let _ = write!(svg, ">{}</text>", escape(&t.content));
}

fn fill_attr(fill: Option<Color>) -> String {
    match fill {
        Some(color) => paint("fill", color),
        None => r#" fill="none""#.to_string(),
    }
}

fn stroke_attr(stroke: Option<Stroke>) -> String {
    match stroke {
        Some(s) => format!(
            r#"{} stroke-width="{}""#,
            paint("stroke", s.color),
            num(s.width)
        ),
        None => String::new(),
    }
}

/// ` fill="#rrggbb"` plus an opacity attribute when translucent.
fn paint(attr: &str, color: Color) -> String {
    if color.is_opaque() {
        format!(r#" {}="{}""#, attr, color.to_hex())
    } else {
        format!(
            r#" {attr}="{}" {attr}-opacity="{}""#,
            color.to_hex(),
            num(color.opacity()),
            attr = attr
        )
    }
}

fn num(v: f64) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Characters XML 1.0 allows in character data.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= '\u{20}' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
}

/// Escape markup and drop characters usvg would reject.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().filter(|c| is_xml_char(*c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
