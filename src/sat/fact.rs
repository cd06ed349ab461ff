use core::fmt;
use core::ops::Not;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Reserved suffix marking extension variables minted by a [`Minter`].
///
/// Facts carrying this suffix are recognizable by shape alone, so later
/// passes can strip them from models without a lookup table. User-supplied
/// names must not end with it; [`Fact::new`] enforces this.
pub const EXT_SUFFIX: &str = "___";

/// An opaque symbolic name for a boolean proposition.
///
/// Facts compare by string identity and are cheap to clone; the name is
/// shared behind an `Arc` so negating a literal twice hands back a value
/// sharing the original allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fact(Arc<str>);

impl Fact {
    /// Creates a fact from a caller-chosen name.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or collides with the extension-variable
    /// naming convention. A colliding name is a contract violation that
    /// would silently corrupt model decoding, so it is rejected up front.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        assert!(!name.is_empty(), "fact names must be non-empty");
        assert!(
            !name.ends_with(EXT_SUFFIX),
            "fact name {name:?} collides with the reserved extension-variable suffix {EXT_SUFFIX:?}"
        );
        Self(Arc::from(name))
    }

    fn reserved(name: String) -> Self {
        Self(Arc::from(name.as_str()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this fact was minted by a [`Minter`], decided by shape alone.
    #[must_use]
    pub fn is_extension(&self) -> bool {
        self.0.ends_with(EXT_SUFFIX)
    }

    /// The positive literal over this fact.
    #[must_use]
    pub fn lit(&self) -> Lit {
        Lit {
            fact: self.clone(),
            polarity: true,
        }
    }
}

impl From<&str> for Fact {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fact with a polarity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit {
    fact: Fact,
    polarity: bool,
}

impl Lit {
    #[must_use]
    pub const fn new(fact: Fact, polarity: bool) -> Self {
        Self { fact, polarity }
    }

    #[must_use]
    pub const fn positive(fact: Fact) -> Self {
        Self::new(fact, true)
    }

    #[must_use]
    pub const fn negative(fact: Fact) -> Self {
        Self::new(fact, false)
    }

    #[must_use]
    pub const fn fact(&self) -> &Fact {
        &self.fact
    }

    #[must_use]
    pub const fn polarity(&self) -> bool {
        self.polarity
    }

    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.polarity
    }

    #[must_use]
    pub const fn is_negated(&self) -> bool {
        !self.polarity
    }

    /// Flips the polarity. Involutive: negating twice yields a value equal
    /// to (and sharing the name allocation of) the original.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            fact: self.fact.clone(),
            polarity: !self.polarity,
        }
    }

    #[must_use]
    pub fn is_extension(&self) -> bool {
        self.fact.is_extension()
    }
}

impl Not for Lit {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negated()
    }
}

impl Not for &Lit {
    type Output = Lit;

    fn not(self) -> Self::Output {
        self.negated()
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.polarity {
            write!(f, "{}", self.fact)
        } else {
            write!(f, "~{}", self.fact)
        }
    }
}

/// Mints extension variables for the Tseytin converter.
///
/// The counter is an explicit value injected by reference wherever fresh
/// variables are needed; [`Minter::global`] hands out the process-wide
/// instance for callers who need minted names to stay unique across
/// independent conversions. Increments are atomic, so concurrent minting
/// never hands two callers the same name.
#[derive(Debug, Default)]
pub struct Minter {
    next: AtomicU64,
}

static GLOBAL_MINTER: Minter = Minter::new();

impl Minter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// The process-wide minter. Monotonic, never reset.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_MINTER
    }

    /// Mints a fresh extension variable, advancing the counter.
    #[must_use]
    pub fn fresh(&self) -> Fact {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        Fact::reserved(format!("{index}{EXT_SUFFIX}"))
    }
}
