//! Portable keystream backend: one Even-Mansour call per block.

use crate::{Block, ChaskeyCtrCore};
use cipher::{
    BlockSizeUser, ParBlocksSizeUser, StreamCipherBackend, StreamCipherSeekCore,
    consts::{U1, U16},
};

pub(crate) struct Backend<'a>(pub(crate) &'a mut ChaskeyCtrCore);

impl BlockSizeUser for Backend<'_> {
    type BlockSize = U16;
}

impl ParBlocksSizeUser for Backend<'_> {
    type ParBlocksSize = U1;
}

impl StreamCipherBackend for Backend<'_> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block) {
        let pos = self.0.get_block_pos();
        *block = self.0.keystream_block(pos);
        self.0.set_block_pos(pos.wrapping_add(1));
    }
}
