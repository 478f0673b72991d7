//! Bounded LRU memoization for group arithmetic
//!
//! The group law is a pure function of the curve parameters and the
//! operand values, so results of `add_points`, `double_point`,
//! `multiply_point` and the internal modular inverse are memoized in a
//! single process-wide LRU. Capacity comes from the `LRU_CACHE_MAXSIZE`
//! environment variable (default 1024, 0 disables caching) and is fixed
//! at the first cached call.

use std::collections::HashMap;
use std::env;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::ec::Point;
use crate::error::Result;
use crate::math;

/// Cache capacity used when `LRU_CACHE_MAXSIZE` is absent or malformed
pub const DEFAULT_CAPACITY: usize = 1024;

/// Environment variable controlling the process-wide cache capacity
pub const CAPACITY_ENV_VAR: &str = "LRU_CACHE_MAXSIZE";

/// A bounded map with least-recently-used eviction.
///
/// A capacity of 0 disables the cache entirely: every insert is a no-op
/// and every lookup misses.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    tick: u64,
    entries: HashMap<K, Entry<V>>,
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    last_used: u64,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        LruCache {
            capacity,
            tick: 0,
            entries: HashMap::new(),
        }
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key, marking it as most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.tick += 1;
        let tick = self.tick;
        self.entries.get_mut(key).map(|entry| {
            entry.last_used = tick;
            entry.value.clone()
        })
    }

    /// Insert a value, evicting the least recently used entry when full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        self.tick += 1;
        let tick = self.tick;
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.last_used = tick;
            return;
        }
        if self.entries.len() == self.capacity {
            self.evict_lru();
        }
        self.entries.insert(
            key,
            Entry {
                value,
                last_used: tick,
            },
        );
    }

    fn evict_lru(&mut self) {
        // Linear scan for the oldest tick; the map is bounded so the
        // scan cost stays proportional to the configured capacity.
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

/// Key for a memoized operation: the operation, the curve identity
/// (p, a, b) where relevant, and the operand values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum OpKey {
    Add {
        p: BigUint,
        a: BigUint,
        b: BigUint,
        lhs: Point,
        rhs: Point,
    },
    Double {
        p: BigUint,
        a: BigUint,
        b: BigUint,
        point: Point,
    },
    Multiply {
        p: BigUint,
        a: BigUint,
        b: BigUint,
        k: BigUint,
        point: Point,
    },
    Inverse {
        value: BigUint,
        modulus: BigUint,
    },
}

#[derive(Clone, Debug)]
pub(crate) enum OpValue {
    Point(Point),
    Integer(BigUint),
}

static OP_CACHE: Lazy<Option<Mutex<LruCache<OpKey, OpValue>>>> = Lazy::new(|| {
    let capacity = env::var(CAPACITY_ENV_VAR)
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(DEFAULT_CAPACITY);
    (capacity > 0).then(|| Mutex::new(LruCache::new(capacity)))
});

/// Configured capacity of the process-wide cache; 0 when caching is
/// disabled.
pub fn capacity() -> usize {
    OP_CACHE
        .as_ref()
        .map(|cache| lock(cache).capacity())
        .unwrap_or(0)
}

fn lock<K, V>(cache: &Mutex<LruCache<K, V>>) -> MutexGuard<'_, LruCache<K, V>> {
    match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn memoize<F>(key: OpKey, compute: F) -> OpValue
where
    F: FnOnce() -> OpValue,
{
    let Some(cache) = OP_CACHE.as_ref() else {
        return compute();
    };
    if let Some(hit) = lock(cache).get(&key) {
        return hit;
    }
    // The lock is not held while computing; a concurrent miss on the
    // same key recomputes the same pure value.
    let value = compute();
    lock(cache).insert(key, value.clone());
    value
}

pub(crate) fn memoize_point<F>(key: OpKey, compute: F) -> Point
where
    F: FnOnce() -> Point,
{
    match memoize(key, || OpValue::Point(compute())) {
        OpValue::Point(point) => point,
        OpValue::Integer(_) => unreachable!("point-valued key"),
    }
}

/// Modular inverse routed through the process-wide cache.
pub(crate) fn cached_mmi(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    // Failures are not cached; non-coprime operands stay an error on
    // every call.
    let key = OpKey::Inverse {
        value: value.clone(),
        modulus: modulus.clone(),
    };
    let Some(cache) = OP_CACHE.as_ref() else {
        return math::mmi(value, modulus);
    };
    if let Some(OpValue::Integer(hit)) = lock(cache).get(&key) {
        return Ok(hit);
    }
    let inverse = math::mmi(value, modulus)?;
    lock(cache).insert(key, OpValue::Integer(inverse.clone()));
    Ok(inverse)
}
