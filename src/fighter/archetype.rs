//! The fighting-game roster: five fixed archetypes, each pairing a color and
//! a signature power. Descriptors are immutable; per-round state lives on
//! [`super::fighter::Fighter`].

/// What a fighter's power actually does when unleashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    /// Fast projectile, heavy damage plus stun.
    Fire,
    /// Slow projectile, light damage plus a long freeze.
    Ice,
    /// Instant forward dash with a close-range shock.
    Electric,
    /// Teleport behind the opponent.
    Dark,
    /// Self-heal.
    Nature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Blaze,
    Frost,
    Volt,
    Shadow,
    Jade,
}

/// Selection-screen order.
pub const ROSTER: [Archetype; 5] = [
    Archetype::Blaze,
    Archetype::Frost,
    Archetype::Volt,
    Archetype::Shadow,
    Archetype::Jade,
];

impl Archetype {
    pub fn name(self) -> &'static str {
        match self {
            Archetype::Blaze => "Blaze",
            Archetype::Frost => "Frost",
            Archetype::Volt => "Volt",
            Archetype::Shadow => "Shadow",
            Archetype::Jade => "Jade",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Archetype::Blaze => (0xef, 0x44, 0x44),
            Archetype::Frost => (0x3b, 0x82, 0xf6),
            Archetype::Volt => (0xea, 0xb3, 0x08),
            Archetype::Shadow => (0xa8, 0x55, 0xf7),
            Archetype::Jade => (0x22, 0xc5, 0x5e),
        }
    }

    pub fn special(self) -> SpecialKind {
        match self {
            Archetype::Blaze => SpecialKind::Fire,
            Archetype::Frost => SpecialKind::Ice,
            Archetype::Volt => SpecialKind::Electric,
            Archetype::Shadow => SpecialKind::Dark,
            Archetype::Jade => SpecialKind::Nature,
        }
    }

    pub fn power_name(self) -> &'static str {
        match self {
            Archetype::Blaze => "Fireball",
            Archetype::Frost => "Ice Shard",
            Archetype::Volt => "Thunder Dash",
            Archetype::Shadow => "Shadow Step",
            Archetype::Jade => "Regenerate",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Archetype::Blaze => "Ranged specialist",
            Archetype::Frost => "Control and stuns",
            Archetype::Volt => "Speed and dashes",
            Archetype::Shadow => "Tricky movement",
            Archetype::Jade => "Tank with recovery",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_five_distinct_archetypes() {
        for (i, a) in ROSTER.iter().enumerate() {
            for b in &ROSTER[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.special(), b.special());
            }
        }
    }
}
