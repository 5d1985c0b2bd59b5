//! Wire convention used by the [`Decoder`](crate::Decoder).
//!
//! Tag lines seen in practice disagree on two points: whether the tag
//! segment keeps its leading `@`, and whether an IRC envelope
//! (`prefix COMMAND #channel`) sits between the tags and the payload. A
//! [`DecoderConfig`] pins both down once so that tag lookup always uses
//! bare keys such as `color`.

/// What to do with a leading `@` on the tag segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerPolicy {
    /// Remove a single leading `@` before the tags are parsed.
    #[default]
    StripLeading,
    /// Parse the segment exactly as received.
    Verbatim,
}

impl MarkerPolicy {
    pub(crate) fn apply(self, segment: &str) -> &str {
        match self {
            MarkerPolicy::StripLeading => segment.strip_prefix('@').unwrap_or(segment),
            MarkerPolicy::Verbatim => segment,
        }
    }
}

/// Layout of the line after the tag segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Framing {
    /// `<tags> :<payload>`. The payload is everything after the first ` :`.
    #[default]
    TagsThenPayload,
    /// `@<tags> :<prefix> <COMMAND> <#channel> :<payload>`, as sent by TMI.
    ///
    /// The envelope is skipped and the payload is everything after the
    /// second ` :`. A line with no second delimiter has an empty payload.
    IrcEnvelope,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecoderConfig {
    pub marker: MarkerPolicy,

    pub framing: Framing,

    /// Run `display-name` and `color` through
    /// [`unescape_tag_value`](crate::message::tags::unescape_tag_value).
    pub unescape_values: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            marker: MarkerPolicy::StripLeading,
            framing: Framing::TagsThenPayload,
            unescape_values: false,
        }
    }
}

impl DecoderConfig {
    /// Convention for full lines read straight off a TMI connection.
    pub fn tmi() -> Self {
        Self {
            marker: MarkerPolicy::StripLeading,
            framing: Framing::IrcEnvelope,
            unescape_values: true,
        }
    }

    pub fn with_marker(mut self, marker: MarkerPolicy) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    pub fn with_unescape_values(mut self, unescape_values: bool) -> Self {
        self.unescape_values = unescape_values;
        self
    }
}
