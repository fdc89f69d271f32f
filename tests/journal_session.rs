use rust_decimal::dec;

use trade_journal::command::Command;
use trade_journal::config::Config;
use trade_journal::session::Session;
use trade_journal::view::{Body, View};

fn run(session: &mut Session, line: &str) -> View {
    match line.parse::<Command>().unwrap() {
        Command::Action(action) => session.handle(action).unwrap(),
        other => panic!("expected an action, got {:?}", other),
    }
}

#[test]
fn full_session_add_stage_delete() {
    let mut session = Session::new(Config::default());

    let empty = session.view();
    assert!(matches!(empty.body, Body::Placeholder(_)));
    assert_eq!(empty.metrics.win_rate, "0.0%");

    run(&mut session, "add NAS100 buy 18000 18040 10 A");
    run(&mut session, "add XAUUSD sell 2350 2355 -5 B");
    run(&mut session, "add GBPUSD buy 1.2650 1.2650 0 C");
    let view = run(&mut session, "add BTCUSD buy 64000 65000 20 D");

    assert_eq!(view.flash.as_deref(), Some("Added BTCUSD!"));
    assert_eq!(view.statistics.count, 4);
    assert_eq!(view.statistics.total_pnl, dec!(25));
    assert_eq!(view.statistics.win_rate, dec!(50));
    assert_eq!(view.metrics.total_pnl, "$25.00");
    assert_eq!(view.metrics.trade_count, "4 trades");

    run(&mut session, "select 2");
    run(&mut session, "select 3");
    run(&mut session, "unselect 3");
    run(&mut session, "note 4 scaled out at 1R");
    let view = run(&mut session, "delete");

    let Body::Table(rows) = &view.body else {
        panic!("expected a table");
    };
    let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["NAS100", "GBPUSD", "BTCUSD"]);
    assert!(rows.iter().all(|r| !r.selected));
    assert_eq!(rows[2].notes, "scaled out at 1R");
    assert_eq!(view.statistics.total_pnl, dec!(30));
    assert_eq!(view.metrics.win_rate, "66.7%");
    assert!(session.store().records().iter().all(|r| !r.selected));
}

#[test]
fn rejected_input_never_reaches_the_journal() {
    let mut session = Session::new(Config::default());
    run(&mut session, "add EURUSD sell 1.0900 1.0850 50");

    assert!("add EURUSD buy -1 1.0850 50".parse::<Command>().is_err());
    assert_eq!(session.store().len(), 1);

    // Delete with nothing staged leaves the journal as it was
    let before = session.store().records().to_vec();
    run(&mut session, "delete");
    assert_eq!(session.store().records(), before.as_slice());
}

#[test]
fn total_out_of_range_is_rejected_without_losing_the_journal() {
    let mut session = Session::new(Config::default());
    let line = "add NAS100 buy 1 1 79228162514264337593543950335";
    run(&mut session, line);

    let Command::Action(action) = line.parse::<Command>().unwrap() else {
        panic!("expected an action");
    };
    let err = session.handle(action).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert_eq!(session.store().len(), 1);

    let view = run(&mut session, "add GBPUSD sell 1.27 1.26 -100 cut early");
    assert_eq!(view.statistics.count, 2);
}
