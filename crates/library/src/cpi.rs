use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::{get_return_data, invoke, invoke_signed},
};

use crate::errors::ErrorCodes;

/// Anchor instruction data: `sha256("global:<ix_name>")[..8]` followed by the borsh encoded args.
pub fn instruction_data<T: AnchorSerialize>(discriminator: &[u8; 8], args: &T) -> Result<Vec<u8>> {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .map_err(|_| error!(ErrorCodes::LibraryInvalidInstructionData))?;
    Ok(data)
}

/// Invokes `program` with `metas`, signing with `signer_seeds` when any are given.
pub fn invoke_instruction<'info>(
    program: &AccountInfo<'info>,
    metas: Vec<AccountMeta>,
    data: Vec<u8>,
    account_infos: &[AccountInfo<'info>],
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let instruction = Instruction {
        program_id: *program.key,
        accounts: metas,
        data,
    };

    let mut infos = account_infos.to_vec();
    infos.push(program.clone());

    let res = if signer_seeds.is_empty() {
        invoke(&instruction, &infos)
    } else {
        invoke_signed(&instruction, &infos, signer_seeds)
    };

    res.map_err(|e| {
        msg!("CPI to {} failed with error: {:?}", program.key, e);
        error!(ErrorCodes::LibraryCpiFailed)
    })
}

/// Invokes a read-only instruction on `program` and decodes what it wrote with `set_return_data`.
pub fn invoke_view<'info, T: AnchorDeserialize>(
    program: &AccountInfo<'info>,
    metas: Vec<AccountMeta>,
    data: Vec<u8>,
    account_infos: &[AccountInfo<'info>],
) -> Result<T> {
    invoke_instruction_with_return(program, metas, data, account_infos, &[])
}

/// Same as `invoke_instruction`, then decodes the callee's return data.
pub fn invoke_instruction_with_return<'info, T: AnchorDeserialize>(
    program: &AccountInfo<'info>,
    metas: Vec<AccountMeta>,
    data: Vec<u8>,
    account_infos: &[AccountInfo<'info>],
    signer_seeds: &[&[&[u8]]],
) -> Result<T> {
    invoke_instruction(program, metas, data, account_infos, signer_seeds)?;

    match get_return_data() {
        Some((program_id, return_data)) if program_id == *program.key => {
            T::try_from_slice(&return_data).map_err(|_| error!(ErrorCodes::LibraryInvalidReturnData))
        }
        _ => err!(ErrorCodes::LibraryInvalidReturnData),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_data_prefixes_discriminator() {
        let discriminator: [u8; 8] = [116, 168, 73, 143, 176, 94, 205, 0];
        let asset = Pubkey::new_unique();

        let data = instruction_data(&discriminator, &(asset, 1_000_u64)).unwrap();

        assert_eq!(data.len(), 8 + 32 + 8);
        assert_eq!(&data[..8], &discriminator);
        assert_eq!(&data[8..40], asset.as_ref());
        assert_eq!(&data[40..], &1_000_u64.to_le_bytes());
    }
}
