//! Suggested paint glyphs for pixel art, grouped roughly as faces and hearts,
//! shapes and symbols, nature, then celebration and objects.

use crate::pixel_art::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

#[rustfmt::skip]
pub const PALETTE: &[&str] = &[
    "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🤣", "😊", "😇", "🙂", "🙃", "😉",
    "😌", "😍", "😘", "😗", "😙", "😚", "😋", "😛", "😝", "😜", "🤪", "🤨", "🧐",
    "😎", "🤓", "😏", "😒", "😞", "😔", "😟", "😕", "🙁", "😣", "😖", "😫", "😩",
    "🥺", "😢", "😭", "😤", "😠", "😡", "🤬", "🤯", "😳", "🥵", "🥶", "😱", "😨",
    "😰", "😥", "😓", "🤗", "🤔", "🤭", "🤫", "🤥", "😶", "😐", "😑", "😯", "😦",
    "😧", "😮", "😲", "🥱", "😴", "🤤", "😪", "😵", "🤐", "🥴", "🤢", "🤮", "🤧",
    "😷", "🤒", "🤕", "🤑", "🤠", "🤡", "🥳", "🥸", "😈", "👿", "👹", "👺", "💀",
    "☠️", "👻", "👽", "👾", "🤖", "😺", "😸", "😹", "😻", "😼", "😽", "🙀", "😿",
    "😾", "🙈", "🙉", "🙊", "💌", "💘", "💝", "💖", "💗", "💓", "💞", "💕", "💟",
    "❣️", "💔", "❤️", "🧡", "💛", "💚", "💙", "💜", "🖤", "🤍", "🤎", "💯", "⬜",
    "⬛", "🔴", "🟠", "🟡", "🟢", "🔵", "🟣", "🟤", "🔶", "🔷", "🔸", "🔹", "🔺",
    "🔻", "💠", "🔘", "⚪", "⚫", "🟥", "🟧", "🟨", "🟩", "🟦", "🟪", "🟫", "⭐",
    "🌟", "✨", "💫", "⚡", "🔥", "💥", "💦", "💨", "🌈", "☀️", "🌙", "❄️", "💎",
    "🎉", "🎊", "🎈", "🎁", "🏆", "🥇", "🏅", "🎯", "🎪", "🎭", "🎨", "🎬", "🎤",
    "🎧", "🎼", "🎹", "🥁", "🎷", "🎺", "🎸", "🪕", "🎻", "🎲", "♟️", "🎳", "🎮",
    "🎰", "🧩", "📱", "📲", "💻", "⌨️", "🌱", "🌲", "🌳", "🌴", "🌵", "🌾", "🌿",
    "☘️", "🍀", "🍁", "🍂", "🍃", "🌺", "🌸", "🌼", "🌻", "🌞", "🌝", "🌛", "🌜",
    "🌚", "🌕", "🌖", "🌗", "🌘", "🌑", "🌒", "🌓", "🌔", "🌎", "🌍", "🌏", "☄️",
    "🌪️", "🌤️", "⛅", "🌥️", "☁️", "🌦️", "🌧️", "⛈️", "🌩️", "🌨️", "☃️", "⛄", "🌬️",
    "💧", "☔", "☂️", "🌊", "🌫️", "🍏", "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇",
    "🍓", "🍈", "🍒", "🍑", "🥭", "🍍", "🔮", "🎀", "🎋", "🎍", "🎎", "🎏", "🎐",
    "🎃", "🎅", "🎄", "🎆", "🎇", "🧨", "🥈", "🥉", "🎖️", "🏵️", "🎗️", "🎟️", "🎫",
    "🖥️", "🖨️", "🖱️", "🖲️", "🕹️",
];

pub fn palette() -> &'static [&'static str] {
    PALETTE
}

/// The default foreground and background glyphs.
pub fn default_glyphs() -> (&'static str, &'static str) {
    (DEFAULT_FOREGROUND, DEFAULT_BACKGROUND)
}
