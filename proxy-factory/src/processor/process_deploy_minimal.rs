use solana_program::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction},
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    rent::Rent,
    system_instruction, system_program,
    sysvar::Sysvar,
};
use steel::*;

use crate::{
    consts::PROXY,
    error::ProxyFactoryError,
    event::ProxyCreated,
    state::{proxy_pda, ProxyFactory},
};

pub fn process_deploy_minimal(
    accounts: &[AccountInfo],
    init_data: &[u8],
) -> Result<(), ProgramError> {
    let [payer, factory_info, logic_info, proxy_info, system_program_info, logic_program_info, forwarded @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !payer.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if *system_program_info.key != system_program::id() {
        return Err(ProgramError::IncorrectProgramId);
    }

    // The logic program owns both the logic account and every clone of it.
    if logic_info.owner != logic_program_info.key {
        return Err(ProxyFactoryError::InvalidLogic.into());
    }

    let space = logic_info.data_len();
    if space == 0 {
        return Err(ProxyFactoryError::EmptyLogic.into());
    }

    let index = factory_info.as_account::<ProxyFactory>(&crate::ID)?.proxy_count;
    let (expected_proxy, bump) = proxy_pda(*factory_info.key, index);
    if expected_proxy != *proxy_info.key {
        return Err(ProxyFactoryError::InvalidPDA.into());
    }

    // Lamports alone do not claim the address; data or a foreign owner does.
    if !proxy_info.data_is_empty() || *proxy_info.owner != system_program::id() {
        return Err(ProxyFactoryError::ProxyExists.into());
    }

    // Allocate the clone with the logic account's layout.
    let rent = Rent::get()?;
    let index_bytes = index.to_le_bytes();
    let bump_seed = [bump];
    let seeds: &[&[u8]] = &[PROXY, factory_info.key.as_ref(), &index_bytes, &bump_seed];
    let system_accounts = [payer.clone(), proxy_info.clone(), system_program_info.clone()];
    let lamports = rent.minimum_balance(space);

    if proxy_info.lamports() == 0 {
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                proxy_info.key,
                lamports,
                space as u64,
                logic_program_info.key,
            ),
            &system_accounts,
            &[seeds],
        )?;
    } else {
        let top_up = lamports.saturating_sub(proxy_info.lamports());
        if top_up > 0 {
            invoke(
                &system_instruction::transfer(payer.key, proxy_info.key, top_up),
                &system_accounts,
            )?;
        }
        invoke_signed(
            &system_instruction::allocate(proxy_info.key, space as u64),
            &system_accounts,
            &[seeds],
        )?;
        invoke_signed(
            &system_instruction::assign(proxy_info.key, logic_program_info.key),
            &system_accounts,
            &[seeds],
        )?;
    }

    // Forward the initializer as [proxy, logic, ...forwarded].
    let mut metas = vec![
        AccountMeta::new(*proxy_info.key, false),
        AccountMeta::new_readonly(*logic_info.key, false),
    ];
    metas.extend(forwarded.iter().map(|info| {
        if info.is_writable {
            AccountMeta::new(*info.key, info.is_signer)
        } else {
            AccountMeta::new_readonly(*info.key, info.is_signer)
        }
    }));

    let mut infos = vec![proxy_info.clone(), logic_info.clone()];
    infos.extend(forwarded.iter().cloned());
    infos.push(logic_program_info.clone());

    invoke(
        &Instruction {
            program_id: *logic_program_info.key,
            accounts: metas,
            data: init_data.to_vec(),
        },
        &infos,
    )?;

    let event = ProxyCreated {
        proxy: *proxy_info.key,
        logic: *logic_info.key,
    };

    let factory = factory_info.as_account_mut::<ProxyFactory>(&crate::ID)?;
    factory.proxy_count = index + 1;
    factory.last_proxy = event.proxy;
    factory.last_logic = event.logic;

    msg!("{}", event.to_log());

    Ok(())
}
