use litesvm::LiteSVM;
use solana_sdk::{account::Account as SolanaAccount, pubkey::Pubkey};
use tic_tac_toe::{Game, ID as TIC_TAC_TOE_PROGRAM_ID};
use anchor_lang::{
    AccountSerialize,
    Space,
};

pub fn create_game_account(
    svm: &mut LiteSVM,
    game_pubkey: Pubkey,
    game: &Game,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(8 + Game::INIT_SPACE);

    // Anchor writes the discriminator + fields
    game
        .try_serialize(&mut data)
        .expect("Could not serialize Game");

    let rent = svm.minimum_balance_for_rent_exemption(data.len());

    let account = SolanaAccount {
        lamports: rent,
        data: data.clone(),
        owner: TIC_TAC_TOE_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    let result = svm.set_account(game_pubkey, account);

    match result {
        Ok(()) => {},

        Err(error) =>{
            panic!("Could not insert Game account into SVM:- {:?}", error);
        }
    }

    data
}
