use solana_program_test::ProgramTest;
use solana_sdk::{
    account::Account,
    hash::hashv,
    pubkey::Pubkey,
    signature::Keypair,
    signer::{keypair::keypair_from_seed, Signer},
    system_program,
};

use crate::{
    config::NetworkProfile,
    error::{FixtureError, Result},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    Deployer,
    Governance,
    Guardian,
    Strategist,
    Keeper,
    User,
    Rewards,
}

/// Fixed ordered pool of test accounts and the roles assigned to them.
///
/// Pool keys are derived from the profile name and the pool index, so every
/// session sees the same addresses.
pub struct RoleRegistry {
    pool: Vec<Keypair>,
    deployer: usize,
    governance: usize,
    guardian: usize,
    strategist: usize,
    keeper: usize,
    user: usize,
    rewards: usize,
}

impl RoleRegistry {
    pub fn from_profile(profile: &NetworkProfile) -> Result<Self> {
        let pool = (0..profile.pool_size)
            .map(|index| pool_keypair(&profile.name, index))
            .collect::<Result<Vec<_>>>()?;

        let roles = &profile.roles;
        let registry = Self {
            pool,
            deployer: roles.deployer,
            governance: roles.governance,
            guardian: roles.guardian,
            strategist: roles.strategist,
            keeper: roles.keeper,
            user: roles.user,
            rewards: profile.rewards_index(),
        };

        for role in Role::ALL {
            if registry.index(role) >= registry.pool.len() {
                return Err(FixtureError::Config(format!(
                    "{role:?} index {} outside pool of {}",
                    registry.index(role),
                    registry.pool.len()
                )));
            }
        }

        Ok(registry)
    }

    pub fn index(&self, role: Role) -> usize {
        match role {
            Role::Deployer => self.deployer,
            Role::Governance => self.governance,
            Role::Guardian => self.guardian,
            Role::Strategist => self.strategist,
            Role::Keeper => self.keeper,
            Role::User => self.user,
            Role::Rewards => self.rewards,
        }
    }

    pub fn get(&self, role: Role) -> &Keypair {
        &self.pool[self.index(role)]
    }

    pub fn address(&self, role: Role) -> Pubkey {
        self.get(role).pubkey()
    }

    pub fn account(&self, index: usize) -> Option<&Keypair> {
        self.pool.get(index)
    }

    pub fn pool(&self) -> &[Keypair] {
        &self.pool
    }

    /// Pre-funds every pool account with `lamports`.
    pub fn fund(&self, program_test: &mut ProgramTest, lamports: u64) {
        for keypair in &self.pool {
            program_test.add_account(
                keypair.pubkey(),
                Account {
                    lamports,
                    data: vec![],
                    owner: system_program::id(),
                    executable: false,
                    rent_epoch: 0,
                },
            );
        }
    }
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Deployer,
        Role::Governance,
        Role::Guardian,
        Role::Strategist,
        Role::Keeper,
        Role::User,
        Role::Rewards,
    ];
}

fn pool_keypair(profile: &str, index: usize) -> Result<Keypair> {
    let seed = hashv(&[
        b"strategy-fixtures",
        profile.as_bytes(),
        &(index as u64).to_le_bytes(),
    ]);
    keypair_from_seed(seed.as_ref()).map_err(|e| FixtureError::Config(e.to_string()))
}
