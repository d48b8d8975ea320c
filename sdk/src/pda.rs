use solana_sdk::pubkey::Pubkey;

use crate::seeds::{
    SEED_BUFFER, SEED_CRANK, SEED_JOB, SEED_ORACLE, SEED_PERMISSION, SEED_PREFIX, SEED_QUEUE,
};

pub fn get_queue_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_PREFIX, SEED_QUEUE], program_id)
}

pub fn get_crank_pda(program_id: &Pubkey, queue: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_PREFIX, SEED_CRANK, &queue.to_bytes()], program_id)
}

pub fn get_oracle_pda(program_id: &Pubkey, queue: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_PREFIX, SEED_ORACLE, &queue.to_bytes()], program_id)
}

pub fn get_permission_pda(program_id: &Pubkey, granter: &Pubkey, grantee: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX,
            SEED_PERMISSION,
            &granter.to_bytes(),
            &grantee.to_bytes(),
        ],
        program_id,
    )
}

pub fn get_job_pda(program_id: &Pubkey, queue: &Pubkey, index: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SEED_PREFIX, SEED_JOB, &queue.to_bytes(), &index.to_le_bytes()],
        program_id,
    )
}

pub fn get_buffer_pda(program_id: &Pubkey, queue: &Pubkey, index: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX,
            SEED_BUFFER,
            &queue.to_bytes(),
            &index.to_le_bytes(),
        ],
        program_id,
    )
}
