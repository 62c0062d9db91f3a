use core::str::FromStr;
use std::process::ExitCode;

use reward_center_sdk::instruction::EditRewardCenterAccounts;
use reward_center_sdk::types::{
    EditRewardCenterParams, PayoutOperation, RewardRules,
};
use solana_client::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signer;
use solana_sdk::signer::keypair::Keypair;
use solana_sdk::transaction::Transaction;


type Result<T = (), E = Error> = core::result::Result<T, E>;


/// `usage: reward-center-client <auction-house> <reward-center>
/// <basis-points> <multiple|divide> <numeral>`
fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("{err}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}


/// Executes the program.
fn run() -> Result {
    let (auction_house, reward_center, reward_rules) = parse_args()?;
    let keypair = read_keypair()?;
    let client = RpcClient::new("http://127.0.0.1:8899");

    let instruction = reward_center_sdk::instruction::edit_reward_center(
        &EditRewardCenterAccounts {
            wallet: keypair.pubkey(),
            auction_house,
            reward_center,
            remaining_accounts: Vec::new(),
        },
        &EditRewardCenterParams { reward_rules },
    )?;
    send_and_confirm_instruction(&client, &keypair, instruction)
}


/// Parses the command line arguments into accounts and new reward rules.
fn parse_args() -> Result<(Pubkey, Pubkey, RewardRules)> {
    let mut args = std::env::args().skip(1);
    let mut next = || args.next().ok_or(Error::Usage);
    let auction_house = reward_center_sdk::identity::parse_identity(&next()?)?;
    let reward_center = reward_center_sdk::identity::parse_identity(&next()?)?;
    let seller_reward_payout_basis_points =
        u16::from_str(&next()?).map_err(|_| Error::Usage)?;
    let mathematical_operand = match next()?.as_str() {
        "multiple" => PayoutOperation::Multiple,
        "divide" => PayoutOperation::Divide,
        _ => return Err(Error::Usage),
    };
    let payout_numeral = u16::from_str(&next()?).map_err(|_| Error::Usage)?;
    let rules = RewardRules {
        seller_reward_payout_basis_points,
        mathematical_operand,
        payout_numeral,
    };
    Ok((auction_house, reward_center, rules))
}


/// Reads keypair from a hard-coded location.
fn read_keypair() -> Result<Keypair> {
    let home = std::env::var_os("HOME").ok_or(Error::Msg("HOME not set"))?;
    let mut path = std::path::PathBuf::from(home);
    path.push(".config/solana/id.json");
    solana_sdk::signer::keypair::read_keypair_file(path)
        .map_err(Error::from)
}


/// Signs the instruction with the payer’s keypair, submits it and waits for
/// confirmation.
fn send_and_confirm_instruction(
    client: &RpcClient,
    keypair: &Keypair,
    instruction: Instruction,
) -> Result {
    let program_id = instruction.program_id;
    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&keypair.pubkey()),
        &[keypair],
        client.get_latest_blockhash()?,
    );
    let sig = client.send_and_confirm_transaction(&tx)?;
    eprintln!("{program_id}: edit_reward_center confirmed as {sig}");
    Ok(())
}


#[derive(derive_more::From, derive_more::Display)]
enum Error {
    #[display(
        "usage: reward-center-client <auction-house> <reward-center> \
         <basis-points> <multiple|divide> <numeral>"
    )]
    #[from(ignore)]
    Usage,
    Msg(&'static str),
    Sdk(reward_center_sdk::Error),
    Client(solana_client::client_error::ClientError),
    Box(Box<dyn std::error::Error>),
}
