mod body;
mod material;
mod contact;

pub use self::body::Body;
pub use self::material::Material;
pub use self::contact::{Contacts, ContactFlags, Direction};

/// Tags the stage loader assigns; any other string is a valid tag too
pub mod tags {
    /// Solid terrain block
    pub const BLOCK: &str = "block";

    /// One-way platform
    pub const BRIDGE: &str = "bridge";

    /// The controllable actor
    pub const PLAYER: &str = "player";
}

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags for controlling the behavior of bodies
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct BodyFlags: u32 {
            /// Terrain: never moved by the simulation
            const FIXED = 0x01;

            /// Blocks movers from above only (a "bridge")
            const ONE_WAY = 0x02;
        }
    }
}
