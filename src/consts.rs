// Node header keywords
pub const SCENE_KEYWORD: &'static str = "Scene";
pub const CHOICE_KEYWORD: &'static str = "Choice";
pub const CONTINUATION_KEYWORD: &'static str = "Continuation of Choice";

// Options-prompt keywords: "What will you do ..." / "What will you answer ..."
pub const PROMPT_PREFIX: &'static str = "What will you";
pub const PROMPT_VERBS: &[&'static str] = &["do", "answer"];

/// Prefix of every scene node id: `Scene 3` yields the id `scene-3`.
pub const SCENE_ID_PREFIX: &'static str = "scene-";

// Hierarchy separators: raw addresses use dots, rendering anchors use dashes.
pub const ADDRESS_SEPARATOR: char = '.';
pub const SLUG_SEPARATOR: char = '-';

/// Maximum number of characters of a node title shown in the table of contents.
pub const TOC_TITLE_WIDTH: usize = 80;
