//! Segmentation of a paragraph stream into nodes.
//!
//! While [individual lines][crate::parse::kind] are classified elsewhere,
//! this module runs the single pass which groups them into [`Node`]s.
//! The running state is an explicit [`Segmenter`] value: the node being
//! accumulated, the option buffer and the mode flag. Nothing here can
//! fail; unrecognized content degrades to body text, and content before
//! the first header is dropped.

use crate::{
    address::slug,
    consts::SCENE_ID_PREFIX,
    node::Node,
    parse::kind::{determine_line_kind, line_has_option_shape, LineKind},
};

use log::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which part of a node the segmenter is currently reading.
enum Mode {
    /// No header has been seen yet.
    NoCurrentNode,
    /// Reading body text of the current node.
    InBody,
    /// Reading the options block of the current node.
    InOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What to do with a line, given its kind and the segmenter state.
enum Action {
    /// Open a new node with the given id; the header line is its title.
    /// An optional trailing piece of the header becomes its first body line.
    OpenNode { id: String, rest: Option<String> },
    /// Append the line to the current node's body and enter the options block.
    BeginOptions,
    /// Append the line to the option buffer.
    PushOption,
    /// Append the line to the current node's body.
    PushBody,
    /// Content before the first header: ignore the line.
    Drop,
}

/// Running segmentation state, threaded through every line.
#[derive(Debug, Default)]
struct Segmenter {
    /// Nodes flushed so far, in script order.
    nodes: Vec<Node>,
    /// The node currently accumulating content, if a header has been seen.
    current: Option<Node>,
    /// Options collected for the current node, committed on flush.
    option_buffer: Vec<String>,
    /// Whether an options prompt has been seen in the current node.
    in_options: bool,
}

/// Segment a sequence of trimmed, non-empty lines into nodes.
///
/// Every line is consumed by exactly one action and segmentation never
/// fails. The same input always yields the same nodes, in input order.
pub fn segment_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Node> {
    let mut segmenter = Segmenter::default();

    for line in lines {
        let line = line.as_ref();

        match classify(line, segmenter.mode()) {
            Action::OpenNode { id, rest } => segmenter.open_node(id, line, rest),
            Action::BeginOptions => segmenter.begin_options(line),
            Action::PushOption => segmenter.push_option(line),
            Action::PushBody => segmenter.push_body(line),
            Action::Drop => warn!("dropping line before first header: '{}'", line),
        }
    }

    segmenter.finish()
}

/// Determine the action for a line in the given mode.
///
/// Headers always open a node, regardless of mode. The prompt enters the
/// options block only when a node exists to attach it to. Inside the
/// options block a line becomes an option if it has option shape, or if
/// an option was already collected (wrapped option text); otherwise it is
/// still part of the question preamble and stays in the body.
fn classify(line: &str, mode: ModeView) -> Action {
    match determine_line_kind(line) {
        LineKind::SceneHeader { number } => Action::OpenNode {
            id: format!("{}{}", SCENE_ID_PREFIX, number),
            rest: None,
        },
        LineKind::ChoiceHeader { number, rest } => Action::OpenNode {
            id: number,
            rest: filled(rest),
        },
        LineKind::ContinuationHeader { path, rest } => Action::OpenNode {
            id: slug(&path),
            rest: filled(rest),
        },
        LineKind::OptionsPrompt => match mode.mode {
            Mode::NoCurrentNode => Action::Drop,
            Mode::InBody | Mode::InOptions => Action::BeginOptions,
        },
        LineKind::Text => match mode.mode {
            Mode::NoCurrentNode => Action::Drop,
            Mode::InBody => Action::PushBody,
            Mode::InOptions => {
                if line_has_option_shape(line) || mode.buffer_has_options {
                    Action::PushOption
                } else {
                    Action::PushBody
                }
            }
        },
    }
}

#[derive(Clone, Copy, Debug)]
/// The part of the segmenter state that classification may observe.
struct ModeView {
    mode: Mode,
    buffer_has_options: bool,
}

impl Segmenter {
    fn mode(&self) -> ModeView {
        let mode = match (&self.current, self.in_options) {
            (None, _) => Mode::NoCurrentNode,
            (Some(_), false) => Mode::InBody,
            (Some(_), true) => Mode::InOptions,
        };

        ModeView {
            mode,
            buffer_has_options: !self.option_buffer.is_empty(),
        }
    }

    /// Flush the current node, then start accumulating a new one.
    fn open_node(&mut self, id: String, title: &str, rest: Option<String>) {
        self.flush();

        debug!("opening node '{}' from header '{}'", id, title);

        let mut node = Node::from_header(id, title);

        if let Some(text) = rest {
            node.body.push(text);
        }

        self.current = Some(node);
    }

    fn begin_options(&mut self, line: &str) {
        if let Some(node) = self.current.as_mut() {
            node.body.push(line.to_string());
        }

        self.in_options = true;
    }

    fn push_option(&mut self, line: &str) {
        self.option_buffer.push(line.to_string());
    }

    fn push_body(&mut self, line: &str) {
        if let Some(node) = self.current.as_mut() {
            node.body.push(line.to_string());
        }
    }

    /// Commit the option buffer into the current node and retire it.
    fn flush(&mut self) {
        if let Some(mut node) = self.current.take() {
            node.options = std::mem::take(&mut self.option_buffer);
            self.nodes.push(node);
        }

        self.option_buffer.clear();
        self.in_options = false;
    }

    /// Flush the final node and return all nodes in script order.
    fn finish(mut self) -> Vec<Node> {
        self.flush();
        self.nodes
    }
}

/// Wrap a header remainder in `Some` if it has content.
fn filled(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
