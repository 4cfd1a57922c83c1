use std::{env, path::PathBuf, process};

use chrono::NaiveDate;
use uuid::Uuid;

use homebudget_core::{
    config::{Config, ConfigManager},
    currency::format_money,
    errors::LedgerError,
    init,
    ledger::{EntryDraft, Totals},
    storage::{json_backend::load_ledger_from_path, JsonStore, LedgerStore},
    utils::build_info,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    init();

    if let Err(err) = run(env::args().skip(1).collect()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Vec<String>) -> CliResult<()> {
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        process::exit(1);
    };

    match command.as_str() {
        "version" => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        "totals-file" => {
            let path = rest.first().map(PathBuf::from).ok_or_else(usage_error)?;
            let ledger = load_ledger_from_path(&path)?;
            let config = ConfigManager::new()?.load()?;
            print_totals(&config, &ledger.totals());
            Ok(())
        }
        "open" | "totals" | "add" | "budget" => {
            let (home_id, date) = home_and_date(rest)?;
            let manager = ConfigManager::new()?;
            let config = manager.load()?;
            let store = JsonStore::new(Some(config.store_root(manager.base_dir())))?;
            let mut ledger = store.open_week(home_id, date)?;
            tracing::debug!(%command, %home_id, week_start = %ledger.week_start, "running command");

            match command.as_str() {
                "open" => println!("{}", serde_json::to_string_pretty(&ledger)?),
                "totals" => print_totals(&config, &ledger.totals()),
                "budget" => {
                    ledger.set_budget_issued(parse_amount(rest.get(2))?)?;
                    store.save(&ledger)?;
                    print_totals(&config, &ledger.totals());
                }
                _ => {
                    let draft = parse_draft(date, &rest[2..])?;
                    let id = ledger.add_entry(draft.build()?)?;
                    store.save(&ledger)?;
                    println!("Added entry {id}");
                    print_totals(&config, &ledger.totals());
                }
            }
            Ok(())
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

fn home_and_date(args: &[String]) -> CliResult<(Uuid, NaiveDate)> {
    let home = args.first().ok_or_else(usage_error)?;
    let date = args.get(1).ok_or_else(usage_error)?;
    let home_id = Uuid::parse_str(home)
        .map_err(|_| LedgerError::InvalidInput(format!("`{home}` is not a home id")))?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidInput(format!("`{date}` is not a YYYY-MM-DD date")))?;
    Ok((home_id, date))
}

fn parse_amount(raw: Option<&String>) -> CliResult<f64> {
    let raw = raw.ok_or_else(usage_error)?;
    raw.parse::<f64>()
        .map_err(|_| LedgerError::InvalidInput(format!("`{raw}` is not an amount")).into())
}

/// `<card|cash|withdrawal> <amount> [yp-cash-in] [description...]`
fn parse_draft(date: NaiveDate, args: &[String]) -> CliResult<EntryDraft> {
    let kind = args.first().ok_or_else(usage_error)?;
    let amount = parse_amount(args.get(1))?;
    let mut draft = match kind.to_ascii_lowercase().as_str() {
        "card" => EntryDraft::card(date, amount),
        "cash" => EntryDraft::cash(date, amount),
        "withdrawal" => EntryDraft::withdrawal(date, amount),
        other => {
            return Err(LedgerError::InvalidInput(format!("unknown entry kind `{other}`")).into())
        }
    };
    if args.len() > 2 {
        draft = draft.with_yp_cash_in(parse_amount(args.get(2))?);
    }
    if args.len() > 3 {
        draft = draft.with_description(args[3..].join(" "));
    }
    Ok(draft)
}

fn print_totals(config: &Config, totals: &Totals) {
    let money =
        |value: f64| format_money(value, &config.currency, &config.locale, config.negative_style);
    let totals = totals.rounded();
    println!("Brought forward:     {}", money(totals.total_brought_forward));
    println!("Card spend:          {}", money(totals.card_spend));
    println!("Cash spend:          {}", money(totals.cash_spend));
    println!("Cash withdrawn:      {}", money(totals.cash_withdrawn));
    println!("YP cash in:          {}", money(totals.yp_in));
    println!("Card balance:        {}", money(totals.total_card_balance));
    println!("Petty cash balance:  {}", money(totals.total_petty_cash_balance));
}

fn usage_error() -> Box<dyn std::error::Error> {
    print_usage();
    LedgerError::InvalidInput("missing arguments".into()).into()
}

fn print_usage() {
    eprintln!(
        "Usage: homebudget_cli <command>\n\
         Commands:\n  \
         open <home-id> <date>\n  \
         budget <home-id> <date> <amount>\n  \
         add <home-id> <date> <card|cash|withdrawal> <amount> [yp-cash-in] [description]\n  \
         totals <home-id> <date>\n  \
         totals-file <ledger.json>\n  \
         version"
    );
}
