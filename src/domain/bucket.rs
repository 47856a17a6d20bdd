//! The fixed display partitions emails are sorted into.
//!
//! `Bucket` is the only place the category enumeration is spelled out: the
//! partition step, the section headers and the card labels all read from it.

/// Records at or above this urgency land in [`Bucket::Urgent`] whatever their category.
pub const URGENT_THRESHOLD: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Urgent,
    WorkHigh,
    WorkMedium,
    WorkLow,
    Promotion,
    Social,
    Spam,
}

impl Bucket {
    /// Every bucket, in display order.
    pub const ALL: [Bucket; 7] = [
        Bucket::Urgent,
        Bucket::WorkHigh,
        Bucket::WorkMedium,
        Bucket::WorkLow,
        Bucket::Promotion,
        Bucket::Social,
        Bucket::Spam,
    ];

    /// Map a record's `category` onto its bucket.
    ///
    /// `urgent` is synthetic and never accepted here; only the six backend
    /// categories resolve.
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "work-high" => Some(Self::WorkHigh),
            "work-medium" => Some(Self::WorkMedium),
            "work-low" => Some(Self::WorkLow),
            "promotion" => Some(Self::Promotion),
            "social" => Some(Self::Social),
            "spam" => Some(Self::Spam),
            _ => None,
        }
    }

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::WorkHigh => "work-high",
            Self::WorkMedium => "work-medium",
            Self::WorkLow => "work-low",
            Self::Promotion => "promotion",
            Self::Social => "social",
            Self::Spam => "spam",
        }
    }

    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Urgent => "🔴",
            Self::WorkHigh => "🟠",
            Self::WorkMedium => "🟡",
            Self::WorkLow => "🟢",
            Self::Promotion => "📧",
            Self::Social => "👥",
            Self::Spam => "🗑️",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Urgent => "URGENT",
            Self::WorkHigh => "HIGH PRIORITY",
            Self::WorkMedium => "MEDIUM PRIORITY",
            Self::WorkLow => "LOW PRIORITY",
            Self::Promotion => "PROMOTIONS",
            Self::Social => "SOCIAL",
            Self::Spam => "SPAM",
        }
    }

    /// Position in display order (0 = first).
    pub const fn position(&self) -> usize {
        *self as usize
    }

    /// Glyph and title, e.g. `🔴 URGENT`.
    pub fn label(&self) -> String {
        format!("{} {}", self.glyph(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_position_order() {
        for (i, b) in Bucket::ALL.iter().enumerate() {
            assert_eq!(b.position(), i);
        }
    }

    #[test]
    fn urgent_is_not_a_backend_category() {
        assert_eq!(Bucket::from_category("urgent"), None);
        assert_eq!(Bucket::from_category("newsletter"), None);
        assert_eq!(Bucket::from_category("Spam"), None);
    }

    #[test]
    fn every_non_urgent_key_resolves_to_itself() {
        for b in Bucket::ALL.into_iter().skip(1) {
            assert_eq!(Bucket::from_category(b.key()), Some(b));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Bucket::Urgent.label(), "🔴 URGENT");
        assert_eq!(Bucket::WorkMedium.label(), "🟡 MEDIUM PRIORITY");
        assert_eq!(Bucket::Spam.label(), "🗑️ SPAM");
    }
}
