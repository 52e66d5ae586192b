//! Session loop tests over scripted terminal input.

use std::io::Cursor;

use twentyone::{GameOptions, Session};

fn run_session(options: GameOptions, input: &str) -> (String, u32) {
    let mut output = Vec::new();
    let mut session = Session::new(options, 7, Cursor::new(input.to_string()), &mut output);
    session.run().unwrap();
    let balance = session.purse().balance();
    drop(session);
    (String::from_utf8(output).unwrap(), balance)
}

#[test]
fn session_ends_immediately_when_out_of_chips() {
    let options = GameOptions::default().with_starting_chips(0);
    let (output, balance) = run_session(options, "");

    assert!(output.contains("out of chips"));
    assert_eq!(balance, 0);
}

#[test]
fn session_reprompts_on_invalid_bet_input() {
    // A non-numeric bet, then a zero bet, then a valid one; stand and quit.
    let (output, balance) = run_session(GameOptions::default(), "abc\n0\n10\ns\nn\n");

    assert!(output.contains("that was not a whole number"));
    assert!(output.contains("bet amount is zero"));
    assert!(output.contains("You stand. Dealer's turn."));
    assert!(output.contains("Thanks for playing!"));
    // One settled round: win, loss, or push of a 10-chip bet.
    assert!(matches!(balance, 90 | 100 | 110));
}

#[test]
fn session_reprompts_on_unknown_choice_token() {
    let (output, _) = run_session(GameOptions::default(), "10\nx\ns\nn\n");

    assert!(output.contains("enter h to hit or s to stand"));
    assert!(output.contains("Thanks for playing!"));
}

#[test]
fn session_rejects_bet_above_balance_then_accepts() {
    let options = GameOptions::default().with_starting_chips(50);
    let (output, balance) = run_session(options, "60\n50\ns\nn\n");

    assert!(output.contains("bet exceeds the chip balance"));
    assert!(matches!(balance, 0 | 50 | 100));
}

#[test]
fn session_reports_the_balance_after_each_round() {
    let (output, balance) = run_session(GameOptions::default(), "10\ns\nn\n");

    assert!(output.contains("Welcome to Blackjack!"));
    assert!(output.contains(&format!("Your chips: {balance}")));
}
