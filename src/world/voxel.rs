//! Sparse voxel block storage.
//!
//! The host game owns the real chunk store; this resource is the block
//! surface the breaking systems read and mutate: block-at-cell lookup,
//! placement, and destruction. Cells without an entry are air.

use bevy::prelude::*;
use std::collections::HashMap;

/// Identifier for a block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const STONE: BlockId = BlockId(1);
    pub const ICE: BlockId = BlockId(2);
    pub const WATER: BlockId = BlockId(3);
    pub const GLASS: BlockId = BlockId(4);
    pub const FRAGILE_GLASS: BlockId = BlockId(5);
    pub const FRAGILE_PANE: BlockId = BlockId(6);
    pub const THIN_ICE: BlockId = BlockId(7);

    pub fn is_air(self) -> bool {
        self == BlockId::AIR
    }
}

/// Sparse block grid keyed by cell address.
#[derive(Resource, Default)]
pub struct VoxelWorld {
    blocks: HashMap<IVec3, BlockId>,
    /// Blocks destroyed since world creation, for stats and tests.
    pub destroyed: u64,
}

impl VoxelWorld {
    /// Block occupying `cell`; air when nothing was placed there.
    pub fn block(&self, cell: IVec3) -> BlockId {
        self.blocks.get(&cell).copied().unwrap_or(BlockId::AIR)
    }

    /// Place `block` at `cell`, overwriting whatever was there.
    pub fn set_block(&mut self, cell: IVec3, block: BlockId) {
        if block.is_air() {
            self.blocks.remove(&cell);
        } else {
            self.blocks.insert(cell, block);
        }
    }

    /// Remove the block at `cell`. Returns false when the cell was already
    /// empty (another entity may have broken it earlier this tick).
    pub fn destroy_block(&mut self, cell: IVec3) -> bool {
        let removed = self.blocks.remove(&cell).is_some();
        if removed {
            self.destroyed += 1;
        }
        removed
    }

    /// Number of non-air cells, for tests and debug overlays.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
