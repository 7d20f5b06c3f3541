// Static scene content: achievement markers and decorative-object parameters.
// Fixed at build time; nothing here is loaded from storage.

/// One achievement shown as an interactive marker in the star map.
#[derive(Clone, Copy, Debug)]
pub struct AchievementEntry {
    pub position: [f32; 3],
    pub title: &'static str,
    pub description: &'static str,
}

/// The sixteen achievements, in constellation order (the decorative line
/// chains them in this order).
pub const ACHIEVEMENTS: [AchievementEntry; 16] = [
    AchievementEntry {
        position: [-2.4, 0.8, 6.9],
        title: "First Light",
        description: "Wrote a first program and watched it actually run. Everything after started here.",
    },
    AchievementEntry {
        position: [3.8, -1.6, 5.7],
        title: "Open Source Debut",
        description: "A first pull request accepted into a project used by strangers on the other side of the world.",
    },
    AchievementEntry {
        position: [7.2, 2.1, 2.4],
        title: "First Production Deploy",
        description: "Shipped code to real users for the first time, then refreshed the error dashboard for an hour.",
    },
    AchievementEntry {
        position: [8.9, -0.7, -2.8],
        title: "The Midnight Fix",
        description: "Found the one-character bug at 2 a.m. and brought the service back before anyone noticed.",
    },
    AchievementEntry {
        position: [6.1, 3.4, -6.3],
        title: "Conference Stage",
        description: "Gave a first public talk. The demo worked on the second try, which counts.",
    },
    AchievementEntry {
        position: [2.2, -2.9, -8.6],
        title: "Shipped v1.0",
        description: "Cut the release tag on a project that began as a weekend sketch.",
    },
    AchievementEntry {
        position: [-2.7, 1.4, -9.2],
        title: "First Mentee",
        description: "Helped someone land their first patch, and learned twice as much explaining it.",
    },
    AchievementEntry {
        position: [-6.8, -1.1, -6.7],
        title: "The Big Migration",
        description: "Moved a decade of data to a new home with zero downtime and one very long checklist.",
    },
    AchievementEntry {
        position: [-9.4, 2.6, -1.9],
        title: "Paper Published",
        description: "Months of experiments condensed into eight pages and one reviewer who finally said yes.",
    },
    AchievementEntry {
        position: [-8.2, -3.2, 3.1],
        title: "Hackathon Gold",
        description: "Forty-eight hours, three ideas abandoned, one prototype that somehow won.",
    },
    AchievementEntry {
        position: [-4.6, 4.1, 7.4],
        title: "Team Lead",
        description: "Traded half the keyboard time for the whole team shipping faster.",
    },
    AchievementEntry {
        position: [0.9, 5.3, 8.8],
        title: "The Rewrite That Worked",
        description: "Replaced the legacy core piece by piece while the old one kept serving traffic.",
    },
    AchievementEntry {
        position: [5.4, 4.8, 6.2],
        title: "10,000 Users",
        description: "Watched the counter roll over five digits and quietly ordered a bigger database.",
    },
    AchievementEntry {
        position: [9.6, 1.9, 3.5],
        title: "Keynote Demo",
        description: "Drove the live demo in front of a packed hall on conference wi-fi. It held.",
    },
    AchievementEntry {
        position: [11.3, -2.4, -0.6],
        title: "Founding Engineer",
        description: "Employee number three. Wrote the first commit, assembled the first desks.",
    },
    AchievementEntry {
        position: [12.1, 0.5, -5.1],
        title: "Still Curious",
        description: "The open slot. Whatever comes next goes here.",
    },
];

// Decorative object parameters

/// Background stars scattered on a shell around the scene.
pub const BACKGROUND_STAR_COUNT: usize = 1200;

/// Drifting dust particles inside the wraparound cube.
pub const PARTICLE_COUNT: usize = 240;

/// A soft-edged nebula billboard placed behind the markers.
#[derive(Clone, Copy, Debug)]
pub struct NebulaSprite {
    pub position: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
}

pub const NEBULAS: [NebulaSprite; 4] = [
    NebulaSprite {
        position: [-14.0, 6.0, -22.0],
        scale: 26.0,
        color: [0.35, 0.25, 0.6, 0.16],
    },
    NebulaSprite {
        position: [18.0, -4.0, -16.0],
        scale: 20.0,
        color: [0.2, 0.35, 0.6, 0.14],
    },
    NebulaSprite {
        position: [4.0, 10.0, 20.0],
        scale: 23.0,
        color: [0.5, 0.3, 0.45, 0.12],
    },
    NebulaSprite {
        position: [-10.0, -9.0, 14.0],
        scale: 17.0,
        color: [0.25, 0.4, 0.55, 0.12],
    },
];

// Palette
pub const MARKER_COLOR: [f32; 3] = [1.0, 0.84, 0.45];
pub const PARTICLE_COLOR: [f32; 3] = [0.75, 0.85, 1.0];
pub const LINE_COLOR: [f32; 3] = [0.45, 0.62, 0.95];
