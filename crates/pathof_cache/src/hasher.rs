//! Provide `PathHashState`, a fixed-seed `foldhash` state.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

const PATH_HASH_STATE: FixedState = FixedState::with_seed(0x2F7C_91D0_4B6A_E35D);

/// Hash state of [`PathCache`](crate::PathCache).
///
/// Based on `foldhash` with a fixed seed: hashes only depend on the input.
#[derive(Copy, Clone, Default, Debug)]
pub struct PathHashState;

impl BuildHasher for PathHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        PATH_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// Tests
