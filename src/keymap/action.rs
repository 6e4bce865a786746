//! Static action registry
//!
//! Every action a hotkey can trigger, with the name used in configuration
//! keys (`key-<name>`, `global-key-<name>`).

use std::fmt;

use super::error::KeymapError;

/// Longest action name accepted in the registry, terminator included
pub const MAX_ACTION_NAME: usize = 20;

/// Prefix of every local hotkey configuration key
pub const CONFIG_PREFIX: &str = "key-";

/// Tag prepended to a local configuration key to get the global one
pub const GLOBAL_TAG: &str = "global-";

/// Identifier of a user-facing command triggered by a hotkey
///
/// `ActionId::None` (raw value 0) means "no action".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum ActionId {
    #[default]
    None = 0,
    AspectRatio,
    AudioTrack,
    AudiodelayDown,
    AudiodelayUp,
    AudiodeviceCycle,
    ChapterNext,
    ChapterPrev,
    Crop,
    CropBottom,
    CropLeft,
    CropRight,
    CropTop,
    ScaleDown,
    Deinterlace,
    DiscMenu,
    Faster,
    FrameNext,
    ScaleUp,
    IntfBoss,
    IntfToggleFsc,
    JumpForwardExtrashort,
    JumpForwardLong,
    JumpForwardMedium,
    JumpForwardShort,
    JumpBackwardExtrashort,
    JumpBackwardLong,
    JumpBackwardMedium,
    JumpBackwardShort,
    LeaveFullscreen,
    Loop,
    MenuDown,
    MenuLeft,
    MenuOff,
    MenuOn,
    MenuRight,
    MenuSelect,
    MenuUp,
    NavActivate,
    NavDown,
    NavLeft,
    NavRight,
    NavUp,
    Next,
    Pause,
    Play,
    PlayBookmark1,
    PlayBookmark10,
    PlayBookmark2,
    PlayBookmark3,
    PlayBookmark4,
    PlayBookmark5,
    PlayBookmark6,
    PlayBookmark7,
    PlayBookmark8,
    PlayBookmark9,
    PlayPause,
    Position,
    Prev,
    Quit,
    Random,
    RateFasterFine,
    RateNormal,
    RateSlowerFine,
    Record,
    Rotate90,
    SetBookmark1,
    SetBookmark10,
    SetBookmark2,
    SetBookmark3,
    SetBookmark4,
    SetBookmark5,
    SetBookmark6,
    SetBookmark7,
    SetBookmark8,
    SetBookmark9,
    Slower,
    Snapshot,
    Stop,
    SubdelayDown,
    SubdelayUp,
    SubposDown,
    SubposUp,
    SubtitleTrack,
    TitleNext,
    TitlePrev,
    ToggleAutoscale,
    ToggleFullscreen,
    UncropBottom,
    UncropLeft,
    UncropRight,
    UncropTop,
    Unzoom,
    VolDown,
    VolMute,
    VolUp,
    Wallpaper,
    Zoom,
    ZoomDouble,
    ZoomHalf,
    ZoomOriginal,
    ZoomQuarter,
}

/// Entry of the static action table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub name: &'static str,
    pub id: ActionId,
}

const fn action(name: &'static str, id: ActionId) -> ActionDescriptor {
    ActionDescriptor { name, id }
}

/// All actions. *MUST* be sorted (ASCII order)
pub const ACTIONS: &[ActionDescriptor] = &[
    action("aspect-ratio", ActionId::AspectRatio),
    action("audio-track", ActionId::AudioTrack),
    action("audiodelay-down", ActionId::AudiodelayDown),
    action("audiodelay-up", ActionId::AudiodelayUp),
    action("audiodevice-cycle", ActionId::AudiodeviceCycle),
    action("chapter-next", ActionId::ChapterNext),
    action("chapter-prev", ActionId::ChapterPrev),
    action("crop", ActionId::Crop),
    action("crop-bottom", ActionId::CropBottom),
    action("crop-left", ActionId::CropLeft),
    action("crop-right", ActionId::CropRight),
    action("crop-top", ActionId::CropTop),
    action("decr-scalefactor", ActionId::ScaleDown),
    action("deinterlace", ActionId::Deinterlace),
    action("disc-menu", ActionId::DiscMenu),
    action("faster", ActionId::Faster),
    action("frame-next", ActionId::FrameNext),
    action("incr-scalefactor", ActionId::ScaleUp),
    action("intf-boss", ActionId::IntfBoss),
    action("intf-show", ActionId::IntfToggleFsc),
    action("jump+extrashort", ActionId::JumpForwardExtrashort),
    action("jump+long", ActionId::JumpForwardLong),
    action("jump+medium", ActionId::JumpForwardMedium),
    action("jump+short", ActionId::JumpForwardShort),
    action("jump-extrashort", ActionId::JumpBackwardExtrashort),
    action("jump-long", ActionId::JumpBackwardLong),
    action("jump-medium", ActionId::JumpBackwardMedium),
    action("jump-short", ActionId::JumpBackwardShort),
    action("leave-fullscreen", ActionId::LeaveFullscreen),
    action("loop", ActionId::Loop),
    action("menu-down", ActionId::MenuDown),
    action("menu-left", ActionId::MenuLeft),
    action("menu-off", ActionId::MenuOff),
    action("menu-on", ActionId::MenuOn),
    action("menu-right", ActionId::MenuRight),
    action("menu-select", ActionId::MenuSelect),
    action("menu-up", ActionId::MenuUp),
    action("nav-activate", ActionId::NavActivate),
    action("nav-down", ActionId::NavDown),
    action("nav-left", ActionId::NavLeft),
    action("nav-right", ActionId::NavRight),
    action("nav-up", ActionId::NavUp),
    action("next", ActionId::Next),
    action("pause", ActionId::Pause),
    action("play", ActionId::Play),
    action("play-bookmark1", ActionId::PlayBookmark1),
    action("play-bookmark10", ActionId::PlayBookmark10),
    action("play-bookmark2", ActionId::PlayBookmark2),
    action("play-bookmark3", ActionId::PlayBookmark3),
    action("play-bookmark4", ActionId::PlayBookmark4),
    action("play-bookmark5", ActionId::PlayBookmark5),
    action("play-bookmark6", ActionId::PlayBookmark6),
    action("play-bookmark7", ActionId::PlayBookmark7),
    action("play-bookmark8", ActionId::PlayBookmark8),
    action("play-bookmark9", ActionId::PlayBookmark9),
    action("play-pause", ActionId::PlayPause),
    action("position", ActionId::Position),
    action("prev", ActionId::Prev),
    action("quit", ActionId::Quit),
    action("random", ActionId::Random),
    action("rate-faster-fine", ActionId::RateFasterFine),
    action("rate-normal", ActionId::RateNormal),
    action("rate-slower-fine", ActionId::RateSlowerFine),
    action("record", ActionId::Record),
    action("rotate90", ActionId::Rotate90),
    action("set-bookmark1", ActionId::SetBookmark1),
    action("set-bookmark10", ActionId::SetBookmark10),
    action("set-bookmark2", ActionId::SetBookmark2),
    action("set-bookmark3", ActionId::SetBookmark3),
    action("set-bookmark4", ActionId::SetBookmark4),
    action("set-bookmark5", ActionId::SetBookmark5),
    action("set-bookmark6", ActionId::SetBookmark6),
    action("set-bookmark7", ActionId::SetBookmark7),
    action("set-bookmark8", ActionId::SetBookmark8),
    action("set-bookmark9", ActionId::SetBookmark9),
    action("slower", ActionId::Slower),
    action("snapshot", ActionId::Snapshot),
    action("stop", ActionId::Stop),
    action("subdelay-down", ActionId::SubdelayDown),
    action("subdelay-up", ActionId::SubdelayUp),
    action("subpos-down", ActionId::SubposDown),
    action("subpos-up", ActionId::SubposUp),
    action("subtitle-track", ActionId::SubtitleTrack),
    action("title-next", ActionId::TitleNext),
    action("title-prev", ActionId::TitlePrev),
    action("toggle-autoscale", ActionId::ToggleAutoscale),
    action("toggle-fullscreen", ActionId::ToggleFullscreen),
    action("uncrop-bottom", ActionId::UncropBottom),
    action("uncrop-left", ActionId::UncropLeft),
    action("uncrop-right", ActionId::UncropRight),
    action("uncrop-top", ActionId::UncropTop),
    action("unzoom", ActionId::Unzoom),
    action("vol-down", ActionId::VolDown),
    action("vol-mute", ActionId::VolMute),
    action("vol-up", ActionId::VolUp),
    action("wallpaper", ActionId::Wallpaper),
    action("zoom", ActionId::Zoom),
    action("zoom-double", ActionId::ZoomDouble),
    action("zoom-half", ActionId::ZoomHalf),
    action("zoom-original", ActionId::ZoomOriginal),
    action("zoom-quarter", ActionId::ZoomQuarter),
];

impl ActionId {
    /// Integer carried by "key-action" notifications
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Inverse of [`ActionId::as_raw`]
    pub fn from_raw(raw: u32) -> Option<ActionId> {
        if raw == ActionId::None.as_raw() {
            return Some(ActionId::None);
        }
        ACTIONS
            .iter()
            .find(|desc| desc.id.as_raw() == raw)
            .map(|desc| desc.id)
    }

    /// Registry name ("play-pause"), or "none" for [`ActionId::None`]
    pub fn name(self) -> &'static str {
        ACTIONS
            .iter()
            .find(|desc| desc.id == self)
            .map_or("none", |desc| desc.name)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, ActionId::None)
    }

    /// Local configuration key for this action (`key-<name>`)
    pub fn config_key(self) -> String {
        format!("{}{}", CONFIG_PREFIX, self.name())
    }

    /// Global configuration key for this action (`global-key-<name>`)
    pub fn global_config_key(self) -> String {
        format!("{}{}{}", GLOBAL_TAG, CONFIG_PREFIX, self.name())
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up an action by its bare registry name ("play")
pub fn lookup_action(name: &str) -> Option<ActionId> {
    ACTIONS
        .binary_search_by(|desc| desc.name.cmp(name))
        .ok()
        .map(|idx| ACTIONS[idx].id)
}

/// Get the action id from a configuration key ("key-play")
///
/// Returns [`ActionId::None`] when the key lacks the `key-` prefix or names
/// no known action.
pub fn action_id(config_key: &str) -> ActionId {
    config_key
        .strip_prefix(CONFIG_PREFIX)
        .and_then(lookup_action)
        .unwrap_or(ActionId::None)
}

/// Like [`action_id`], but reports which key was not understood
///
/// Accepts both local and global keys.
pub fn resolve_config_key(config_key: &str) -> Result<ActionId, KeymapError> {
    let local = config_key.strip_prefix(GLOBAL_TAG).unwrap_or(config_key);
    match action_id(local) {
        ActionId::None => Err(KeymapError::UnknownConfigKey(config_key.to_string())),
        id => Ok(id),
    }
}

/// Runtime list of action names, for shortcut editors and other introspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTable {
    names: Vec<&'static str>,
}

impl ActionTable {
    /// Build the table, one entry per known action in registry order
    pub fn new() -> Result<Self, KeymapError> {
        let mut names = Vec::new();
        names.try_reserve_exact(ACTIONS.len())?;
        names.extend(ACTIONS.iter().map(|desc| desc.name));
        Ok(Self { names })
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&'static str> {
        self.names.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}
