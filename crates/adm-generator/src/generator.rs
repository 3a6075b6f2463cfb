//! Weighted recursive value generator.

use crate::config::{ConfigError, GeneratorConfig, Shares};
use crate::generators::{self, text::random_text, PrimitiveKind};
use adm_core::{Object, Value, ValueError};
use rand::Rng;
use tracing::trace;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration rejected before generation
    #[error("Invalid generator config: {0}")]
    Config(#[from] ConfigError),

    /// A generated scalar failed validation
    #[error("Value construction failed: {0}")]
    Value(#[from] ValueError),
}

/// The three value categories weighted by [`Shares`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Primitive,
    Incomplete,
    Derived,
}

/// Composite variants, chosen with equal probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    Object,
    Array,
    Multiset,
}

impl CompositeKind {
    pub const ALL: [CompositeKind; 3] = [Self::Object, Self::Array, Self::Multiset];
}

/// Member-count and depth limits for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_members: usize,
    pub max_members: usize,
    pub max_depth: usize,
}

impl Bounds {
    pub fn new(min_members: usize, max_members: usize, max_depth: usize) -> Self {
        Self {
            min_members,
            max_members,
            max_depth,
        }
    }

    /// Fresh bounds for one member of a composite.
    ///
    /// Every member re-draws its own ceiling: a minimum within the parent's
    /// member range, a maximum between that minimum and the parent's
    /// maximum, and a depth strictly below the parent's. Siblings therefore
    /// grow to different sizes and depths.
    pub fn draw_child<R: Rng>(&self, rng: &mut R) -> Self {
        let min_members = rng.random_range(self.min_members..=self.max_members);
        let max_members = rng.random_range(min_members..=self.max_members);
        let max_depth = if self.max_depth >= 1 {
            rng.random_range(0..=self.max_depth - 1)
        } else {
            0
        };
        Self::new(min_members, max_members, max_depth)
    }
}

impl Shares {
    /// Choose a category by drawing uniformly from `[1, total]`.
    ///
    /// The derived share only counts while `max_depth > 0`, so composites
    /// stop appearing once the depth budget is spent. Returns `None` when no
    /// category has weight, without drawing.
    pub fn choose<R: Rng>(&self, rng: &mut R, max_depth: usize) -> Option<Category> {
        let primitive = u64::from(self.primitive);
        let non_derived = primitive + u64::from(self.incomplete);
        let total = if max_depth > 0 {
            non_derived + u64::from(self.derived)
        } else {
            non_derived
        };

        if total == 0 {
            return None;
        }

        let draw = rng.random_range(1..=total);
        let category = if draw <= primitive {
            Category::Primitive
        } else if draw <= non_derived {
            Category::Incomplete
        } else {
            Category::Derived
        };
        Some(category)
    }
}

/// Generator of random ADM value trees.
///
/// Generation is a pure function of the RNG stream: the same config and an
/// identically seeded RNG always produce the same tree.
#[derive(Debug, Clone)]
pub struct ValueGenerator {
    config: GeneratorConfig,
    key_alphabet: Vec<char>,
}

impl ValueGenerator {
    /// Create a generator, validating the config first.
    ///
    /// Alphabets colliding with the encoder markers are rejected here, before
    /// any value is produced.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let key_alphabet = config.key_alphabet.chars().collect();
        Ok(Self {
            config,
            key_alphabet,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Bounds taken from the config.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.config.min_members,
            self.config.max_members,
            self.config.max_depth,
        )
    }

    /// Generate a value of any category using the configured bounds.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Value, GeneratorError> {
        self.generate_value(self.bounds(), rng)
    }

    /// Generate a value of any category within `bounds`.
    pub fn generate_value<R: Rng>(&self, bounds: Bounds, rng: &mut R) -> Result<Value, GeneratorError> {
        self.check_bounds(bounds)?;
        self.generate_unchecked(bounds, rng)
    }

    /// Generate an object, whatever the shares say.
    ///
    /// Used for top-level records, which are always documents.
    pub fn generate_object<R: Rng>(&self, bounds: Bounds, rng: &mut R) -> Result<Value, GeneratorError> {
        self.check_bounds(bounds)?;
        self.generate_composite(CompositeKind::Object, bounds, rng)
    }

    /// Object key: a random prefix followed by the member's position.
    ///
    /// The positional suffix makes keys unique within one object without a
    /// collision check.
    pub fn generate_key<R: Rng>(&self, index: usize, rng: &mut R) -> String {
        let mut key = random_text(rng, self.config.key_length, &self.key_alphabet);
        key.push_str(&index.to_string());
        key
    }

    fn check_bounds(&self, bounds: Bounds) -> Result<(), ConfigError> {
        if bounds.min_members > bounds.max_members {
            return Err(ConfigError::InvalidMemberBounds {
                min: bounds.min_members,
                max: bounds.max_members,
            });
        }
        Ok(())
    }

    fn generate_unchecked<R: Rng>(&self, bounds: Bounds, rng: &mut R) -> Result<Value, GeneratorError> {
        let category = self
            .config
            .shares
            .choose(rng, bounds.max_depth)
            .ok_or(ConfigError::NoLeafShare)?;
        match category {
            Category::Primitive => {
                let kind = PrimitiveKind::random(rng);
                Ok(generators::generate_primitive(kind, &self.config, rng)?)
            }
            Category::Incomplete => Ok(generators::generate_incomplete(rng)),
            Category::Derived => {
                let kind = CompositeKind::ALL[rng.random_range(0..CompositeKind::ALL.len())];
                self.generate_composite(kind, bounds, rng)
            }
        }
    }

    fn generate_composite<R: Rng>(
        &self,
        kind: CompositeKind,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<Value, GeneratorError> {
        let num_members = rng.random_range(bounds.min_members..=bounds.max_members);
        trace!(?kind, num_members, max_depth = bounds.max_depth, "generating composite");

        match kind {
            CompositeKind::Object => {
                let mut members = Object::with_capacity(num_members);
                for index in 0..num_members {
                    let key = self.generate_key(index, rng);
                    let value = self.generate_member(bounds, rng)?;
                    members.insert(key, value);
                }
                Ok(Value::Object(members))
            }
            CompositeKind::Array => Ok(Value::Array(self.generate_members(num_members, bounds, rng)?)),
            CompositeKind::Multiset => {
                Ok(Value::Multiset(self.generate_members(num_members, bounds, rng)?))
            }
        }
    }

    fn generate_members<R: Rng>(
        &self,
        count: usize,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<Vec<Value>, GeneratorError> {
        (0..count).map(|_| self.generate_member(bounds, rng)).collect()
    }

    fn generate_member<R: Rng>(&self, parent: Bounds, rng: &mut R) -> Result<Value, GeneratorError> {
        let child = parent.draw_child(rng);
        self.generate_unchecked(child, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator(shares: Shares) -> ValueGenerator {
        ValueGenerator::new(GeneratorConfig {
            shares,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_choose_ignores_derived_at_depth_zero() {
        let shares = Shares::new(1, 1, 1000);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            assert_ne!(shares.choose(&mut rng, 0), Some(Category::Derived));
        }
    }

    #[test]
    fn test_choose_respects_zero_shares() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(Shares::new(3, 0, 0).choose(&mut rng, 5), Some(Category::Primitive));
            assert_eq!(Shares::new(0, 2, 0).choose(&mut rng, 5), Some(Category::Incomplete));
            assert_eq!(Shares::new(0, 1, 0).choose(&mut rng, 0), Some(Category::Incomplete));
        }
    }

    #[test]
    fn test_choose_without_weight_returns_none() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut untouched = StdRng::seed_from_u64(42);

        assert_eq!(Shares::new(0, 0, 5).choose(&mut rng, 0), None);
        assert_eq!(Shares::new(0, 0, 0).choose(&mut rng, 3), None);
        assert_eq!(Shares::new(0, 0, 5).choose(&mut rng, 1), Some(Category::Derived));
        // Only the last call drew from the stream
        untouched.random_range(1..=5u64);
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn test_draw_child_stays_within_parent() {
        let parent = Bounds::new(2, 6, 3);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let child = parent.draw_child(&mut rng);
            assert!(child.min_members >= parent.min_members);
            assert!(child.min_members <= child.max_members);
            assert!(child.max_members <= parent.max_members);
            assert!(child.max_depth < parent.max_depth);
        }

        let leaf = Bounds::new(1, 1, 0).draw_child(&mut rng);
        assert_eq!(leaf.max_depth, 0);
    }

    #[test]
    fn test_derived_only_produces_composite_at_root() {
        let generator = generator(Shares::new(0, 1, 1_000_000));
        let mut rng = StdRng::seed_from_u64(1);

        let value = generator.generate_value(Bounds::new(1, 3, 2), &mut rng).unwrap();
        assert!(value.is_composite());
        assert!(value.depth() <= 2);
    }

    #[test]
    fn test_object_keys_have_positional_suffix() {
        let generator = generator(Shares::default());
        let mut rng = StdRng::seed_from_u64(42);

        let value = generator.generate_object(Bounds::new(4, 4, 1), &mut rng).unwrap();
        let members = value.as_object().unwrap();
        assert_eq!(members.len(), 4);
        for (index, key) in members.keys().enumerate() {
            assert!(key.ends_with(&index.to_string()));
            assert_eq!(key.len(), 5 + index.to_string().len());
        }
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let generator = generator(Shares::default());
        let mut rng = StdRng::seed_from_u64(42);

        let result = generator.generate_value(Bounds::new(3, 1, 1), &mut rng);
        assert!(matches!(
            result,
            Err(GeneratorError::Config(ConfigError::InvalidMemberBounds { .. }))
        ));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = generator(Shares::new(2, 1, 2));
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let a = generator.generate(&mut rng1).unwrap();
            let b = generator.generate(&mut rng2).unwrap();
            // Debug output compares NaN payloads textually
            assert_eq!(format!("{a:?}"), format!("{b:?}"));
        }
    }
}
