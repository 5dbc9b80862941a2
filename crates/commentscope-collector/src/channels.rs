//! Channel bias lookup table

use commentscope_domain::Bias;

/// A named group of channels sharing a bias tag
pub struct ChannelCategory {
    /// Bias tag applied to every channel in the group
    pub bias: Bias,

    /// Human-readable group description
    pub description: &'static str,

    /// Channel titles as they appear on YouTube
    pub channels: &'static [&'static str],
}

/// The fixed channel groups comments are tagged against
pub const CHANNEL_CATEGORIES: [ChannelCategory; 4] = [
    ChannelCategory {
        bias: Bias::Local,
        description: "Local Minneapolis/Minnesota News",
        channels: &["KARE 11", "WCCO", "FOX 9", "KSTP"],
    },
    ChannelCategory {
        bias: Bias::Mainstream,
        description: "Mainstream National News",
        channels: &["ABC News", "CBS News", "NBC News", "Reuters", "Associated Press"],
    },
    ChannelCategory {
        bias: Bias::Right,
        description: "Right-Leaning Sources",
        channels: &["Fox News", "Daily Wire", "Newsmax", "The First"],
    },
    ChannelCategory {
        bias: Bias::Left,
        description: "Left-Leaning Sources",
        channels: &["MSNBC", "The Young Turks", "Democracy Now", "CNN"],
    },
];

/// Determine the bias tag for a channel title
///
/// Matching is case-insensitive and substring in either direction, so
/// "FOX 9 Minneapolis-St. Paul" matches the "FOX 9" entry and "WCCO"
/// matches "WCCO - CBS Minnesota". Unmatched channels get `Unknown`.
pub fn bias_for_channel(channel_title: &str) -> Bias {
    let title = channel_title.to_lowercase();

    for category in &CHANNEL_CATEGORIES {
        for name in category.channels {
            let name = name.to_lowercase();
            if title.contains(&name) || name.contains(&title) {
                return category.bias;
            }
        }
    }

    Bias::Unknown
}
