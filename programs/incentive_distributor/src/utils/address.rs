use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::EVM_ADDRESS_LEN;

/// EVM-style 20-byte address as carried in proof outputs
pub type EvmAddress = [u8; EVM_ADDRESS_LEN];

/// Maps a pubkey to the address proof circuits commit to
///
/// Same rule as Ethereum: the last 20 bytes of keccak256 over the key bytes.
pub fn evm_address(key: &Pubkey) -> EvmAddress {
    let hash = keccak::hash(key.as_ref()).to_bytes();
    let mut address = [0u8; EVM_ADDRESS_LEN];
    address.copy_from_slice(&hash[32 - EVM_ADDRESS_LEN..]);
    address
}

/// Distribution identifier for the creator's `nonce`-th distribution
pub fn distribution_id(creator: &Pubkey, nonce: u64) -> [u8; 32] {
    keccak::hashv(&[creator.as_ref(), &nonce.to_be_bytes()]).to_bytes()
}
