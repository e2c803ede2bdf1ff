use anchor_lang::prelude::*;
use crate::errors::RegistryError;

/// Parent Asset - one per issued parent id, holds its current owner
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct ParentAsset {
    /// Registry-assigned id
    pub id: u64,

    /// Current owner
    pub owner: Pubkey,

    /// Timestamp when minted
    pub minted_ts: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl ParentAsset {
    /// Discriminator (8) + u64 (8) + Pubkey (32) + i64 (8) + u8 (1)
    pub const LEN: usize = 8 + 8 + 32 + 8 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"parent_asset";

    /// Address of the parent asset account for `parent_id`
    pub fn find_address(parent_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, parent_id.to_le_bytes().as_ref()],
            &crate::ID,
        )
    }

    /// Resolve the current owner of `parent_id` from its account.
    ///
    /// This is the read path other programs use to authorize against the
    /// registry without a CPI. The account must sit at the parent's PDA;
    /// an address that was never initialized by this program means the id
    /// was never issued and yields `UnknownParent`.
    pub fn owner_of(parent_asset: &AccountInfo, parent_id: u64) -> Result<Pubkey> {
        let (expected, _) = Self::find_address(parent_id);
        require_keys_eq!(
            *parent_asset.key,
            expected,
            RegistryError::ParentAccountMismatch
        );

        let asset = Self::load(parent_asset).ok_or(RegistryError::UnknownParent)?;
        Ok(asset.owner)
    }

    fn load(info: &AccountInfo) -> Option<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return None;
        }
        let data = info.try_borrow_data().ok()?;
        Self::try_deserialize(&mut &data[..]).ok()
    }

    /// Hand the asset to `new_owner`, returning the previous owner
    pub fn transfer(&mut self, signer: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        require_keys_eq!(*signer, self.owner, RegistryError::NotOwner);
        require_keys_neq!(new_owner, Pubkey::default(), RegistryError::InvalidRecipient);

        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(parent_id: u64, owner: Pubkey) -> ParentAsset {
        let (_, bump) = ParentAsset::find_address(parent_id);
        ParentAsset {
            id: parent_id,
            owner,
            minted_ts: 1_700_000_000,
            bump,
        }
    }

    fn serialized(asset: &ParentAsset) -> Vec<u8> {
        let mut data = Vec::new();
        asset.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn owner_of_reads_the_stored_owner() {
        let owner = Pubkey::new_unique();
        let (key, _) = ParentAsset::find_address(1);
        let program_id = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = serialized(&asset(1, owner));
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program_id, false, 0);

        assert_eq!(ParentAsset::owner_of(&info, 1).unwrap(), owner);
    }

    #[test]
    fn uninitialized_parent_is_unknown() {
        let (key, _) = ParentAsset::find_address(99_999);
        let system_program = Pubkey::default();
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &system_program, false, 0);

        let err = ParentAsset::owner_of(&info, 99_999).unwrap_err();
        assert_eq!(err, RegistryError::UnknownParent.into());
    }

    #[test]
    fn foreign_owned_account_is_unknown() {
        let (key, _) = ParentAsset::find_address(3);
        let impostor = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data = serialized(&asset(3, Pubkey::new_unique()));
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &impostor, false, 0);

        let err = ParentAsset::owner_of(&info, 3).unwrap_err();
        assert_eq!(err, RegistryError::UnknownParent.into());
    }

    #[test]
    fn account_for_another_id_is_rejected() {
        let (key, _) = ParentAsset::find_address(2);
        let program_id = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = serialized(&asset(2, Pubkey::new_unique()));
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program_id, false, 0);

        let err = ParentAsset::owner_of(&info, 1).unwrap_err();
        assert_eq!(err, RegistryError::ParentAccountMismatch.into());
    }

    #[test]
    fn only_the_owner_can_transfer() {
        let owner = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut parent = asset(1, owner);

        let err = parent.transfer(&stranger, stranger).unwrap_err();
        assert_eq!(err, RegistryError::NotOwner.into());
        assert_eq!(parent.owner, owner);

        let previous = parent.transfer(&owner, stranger).unwrap();
        assert_eq!(previous, owner);
        assert_eq!(parent.owner, stranger);
    }

    #[test]
    fn transfer_to_default_key_is_rejected() {
        let owner = Pubkey::new_unique();
        let mut parent = asset(1, owner);

        let err = parent.transfer(&owner, Pubkey::default()).unwrap_err();
        assert_eq!(err, RegistryError::InvalidRecipient.into());
        assert_eq!(parent.owner, owner);
    }
}
