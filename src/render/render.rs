use crate::lexer::tokens::Segment;

/// Receives segments in emission order. Implementations perform whatever
/// rendering fits their environment; the lexer itself never formats output.
pub trait OutputSink {
    fn emit(&mut self, segment: Segment);
}

/// Collects emitted segments into a `Vec`, preserving order.
pub struct SegmentCollector {
    segments: Vec<Segment>,
}

impl SegmentCollector {
    pub fn new() -> SegmentCollector {
        SegmentCollector { segments: vec![] }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl Default for SegmentCollector {
    fn default() -> SegmentCollector {
        SegmentCollector::new()
    }
}

impl OutputSink for SegmentCollector {
    fn emit(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

/// Builds an HTML span stream, one `<span>` per segment. Styled segments get
/// an inline `style` attribute; unstyled ones get a bare span so the text
/// still appears in output order.
pub struct HtmlRenderer {
    html: String,
}

impl HtmlRenderer {
    pub fn new() -> HtmlRenderer {
        HtmlRenderer {
            html: String::new(),
        }
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl Default for HtmlRenderer {
    fn default() -> HtmlRenderer {
        HtmlRenderer::new()
    }
}

impl OutputSink for HtmlRenderer {
    fn emit(&mut self, segment: Segment) {
        match segment.style {
            Some(style) => {
                self.html.push_str("<span style=\"");
                self.html.push_str(&escape(&style));
                self.html.push_str("\">");
            }
            None => self.html.push_str("<span>"),
        }
        self.html.push_str(&escape(&segment.content));
        self.html.push_str("</span>");
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
