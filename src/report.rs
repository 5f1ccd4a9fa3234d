//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Vet.
//! The Vet project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Report Module
//!
//! The result value of a validation run: the ordered error log, plus the
//! rendering machinery that substitutes `{field}`, `{value}`, `{filter}`,
//! `{args}` and `{arg<n>}` placeholders and optionally wraps each element
//! in caller-supplied HTML span attributes. Each run returns its own
//! report; no error state lives on the engine.

use serde::Serialize;

/// Render modes for a validation report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VetReportFormat {
    /// Plain messages only.
    Plain,
    /// Pairs of (field, plain message).
    FieldsAndPlain,
    /// Span-wrapped messages only.
    Html,
    /// Pairs of (field, span-wrapped message).
    FieldsAndHtml,
}

impl VetReportFormat {
    fn is_html(self) -> bool {
        matches!(self, VetReportFormat::Html | VetReportFormat::FieldsAndHtml)
    }

    fn includes_fields(self) -> bool {
        matches!(
            self,
            VetReportFormat::FieldsAndPlain | VetReportFormat::FieldsAndHtml
        )
    }
}

/// Per-element HTML span attribute strings for the HTML render modes.
///
/// An empty string leaves that element unwrapped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VetSpanAttrs {
    pub errormsg: String,
    pub field: String,
    pub value: String,
    pub filter: String,
    pub arg: String,
}

/// One failing validation step.
#[derive(Clone, Debug, Serialize)]
pub struct VetErrorEntry {
    /// Full field path as registered.
    pub field: String,
    /// Display label at the time of failure.
    pub label: String,
    /// Stringified field value at failure time.
    pub value: String,
    /// Filter name that failed, as written in the rule.
    pub filter: String,
    /// Arguments of the failing rule.
    pub args: Vec<String>,
    /// Chosen message template, precedence already applied.
    pub errormsg: String,
}

/// Rendered report: either bare messages or field-keyed pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VetRenderedReport {
    Messages(Vec<String>),
    FieldMessages(Vec<(String, String)>),
}

impl VetRenderedReport {
    /// Messages regardless of keying.
    pub fn messages(&self) -> Vec<String> {
        match self {
            VetRenderedReport::Messages(msgs) => msgs.clone(),
            VetRenderedReport::FieldMessages(pairs) => {
                pairs.iter().map(|(_, msg)| msg.clone()).collect()
            }
        }
    }
}

/// Result of one validation run.
#[derive(Clone, Debug)]
pub struct VetReport {
    entries: Vec<VetErrorEntry>,
    spans: VetSpanAttrs,
    args_delimiter: String,
}

impl VetReport {
    #[allow(non_snake_case)]
    pub(crate) fn new(
        entries: Vec<VetErrorEntry>,
        spans: VetSpanAttrs,
        args_delimiter: String,
    ) -> Self {
        VetReport {
            entries,
            spans,
            args_delimiter,
        }
    }

    /// True when no validation step failed.
    pub fn passed(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entries, in failure order.
    pub fn entries(&self) -> &[VetErrorEntry] {
        &self.entries
    }

    /// Renders every entry in the requested mode.
    #[allow(non_snake_case)]
    pub fn render(&self, format: VetReportFormat) -> VetRenderedReport {
        static EMPTY_SPANS: VetSpanAttrs = VetSpanAttrs {
            errormsg: String::new(),
            field: String::new(),
            value: String::new(),
            filter: String::new(),
            arg: String::new(),
        };
        let spans = if format.is_html() {
            &self.spans
        } else {
            &EMPTY_SPANS
        };

        let rendered: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|entry| {
                (
                    entry.field.clone(),
                    interpolate(entry, spans, &self.args_delimiter),
                )
            })
            .collect();

        if format.includes_fields() {
            VetRenderedReport::FieldMessages(rendered)
        } else {
            VetRenderedReport::Messages(rendered.into_iter().map(|(_, msg)| msg).collect())
        }
    }

    /// Renders and joins all messages with the given delimiter.
    #[allow(non_snake_case)]
    pub fn render_joined(&self, format: VetReportFormat, delimiter: &str) -> String {
        self.render(format).messages().join(delimiter)
    }
}

fn span_pair(attr: &str) -> (String, &'static str) {
    if attr.is_empty() {
        (String::new(), "")
    } else {
        (format!("<span {attr}>"), "</span>")
    }
}

/// Substitutes message-template placeholders with entry data.
///
/// `{value}` renders as the literal `empty` when the value was an empty
/// string. Unmatched placeholders are left verbatim.
fn interpolate(entry: &VetErrorEntry, spans: &VetSpanAttrs, args_delimiter: &str) -> String {
    let (msg_open, msg_close) = span_pair(&spans.errormsg);
    let (field_open, field_close) = span_pair(&spans.field);
    let (value_open, value_close) = span_pair(&spans.value);
    let (filter_open, filter_close) = span_pair(&spans.filter);
    let (arg_open, arg_close) = span_pair(&spans.arg);

    let value = if entry.value.is_empty() {
        "empty"
    } else {
        entry.value.as_str()
    };

    let mut message = entry
        .errormsg
        .replace("{field}", &format!("{field_open}{}{field_close}", entry.label))
        .replace("{value}", &format!("{value_open}{value}{value_close}"))
        .replace(
            "{filter}",
            &format!("{filter_open}{}{filter_close}", entry.filter),
        );

    let args_joined = entry
        .args
        .iter()
        .map(|arg| format!("{arg_open}{arg}{arg_close}"))
        .collect::<Vec<_>>()
        .join(args_delimiter);
    message = message.replace("{args}", &args_joined);

    for (index, arg) in entry.args.iter().enumerate() {
        message = message.replace(
            &format!("{{arg{}}}", index + 1),
            &format!("{arg_open}{arg}{arg_close}"),
        );
    }

    format!("{msg_open}{message}{msg_close}")
}
