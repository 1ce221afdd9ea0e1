//! Interactive dashboard session.
//!
//! A single task owns the [`Dashboard`]. Lines typed on stdin and finished
//! fetches both arrive on one channel, so every state change happens in the
//! order messages are received and nothing else ever touches the dashboard.
//! Each fetch runs in its own task and reports back with the ticket it was
//! issued with; the dashboard drops answers for years that are no longer
//! selected.

use crate::render;
use gw_core::{
    Applied, Dashboard, Event, FetchTicket, Orientation, Result as GwResult, StatsClient,
    ViewMode, YearRange, YearStats,
};
use log::{debug, info};
use std::io::BufRead;
use tokio::sync::mpsc::{self, UnboundedSender};

const HELP: &str = "\
Commands:
  year <YYYY>                    show another year
  compare <YYYY|none>            compare with a second year
  mode <interactive|export>      switch between charts and shareable images
  layout <portrait|landscape>    image layout in export mode
  show                           redraw the dashboard
  help                           this text
  quit                           leave";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    Show,
    Help,
    Quit,
}

enum Message {
    Line(String),
    Fetched(FetchTicket, GwResult<YearStats>),
    InputClosed,
}

/// Parse one line of user input.
pub fn parse_input(line: &str) -> anyhow::Result<Input> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("").to_lowercase();
    let arg = words.next();

    let input = match (command.as_str(), arg) {
        ("year", Some(year)) => Input::Event(Event::SelectPrimaryYear(year.parse()?)),
        ("compare", Some(arg)) if arg.eq_ignore_ascii_case("none") => {
            Input::Event(Event::SelectCompareYear(None))
        }
        ("compare", Some(year)) => Input::Event(Event::SelectCompareYear(Some(year.parse()?))),
        ("mode", Some(mode)) => Input::Event(Event::SetViewMode(mode.parse::<ViewMode>()?)),
        ("layout", Some(layout)) => {
            Input::Event(Event::SetOrientation(layout.parse::<Orientation>()?))
        }
        ("show", None) | ("", None) => Input::Show,
        ("help", _) | ("?", _) => Input::Help,
        ("quit", _) | ("exit", _) | ("q", _) => Input::Quit,
        _ => anyhow::bail!("unrecognized command: {}", line.trim()),
    };
    Ok(input)
}

fn spawn_fetch(client: &StatsClient, tx: &UnboundedSender<Message>, ticket: FetchTicket) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_year_stats(ticket.year).await;
        // the session may already be gone
        let _ = tx.send(Message::Fetched(ticket, result));
    });
}

fn draw(dashboard: &Dashboard, client: &StatsClient) {
    let mut header = format!("== GAMER WRAPPED {} ", dashboard.primary_year());
    if let Some(year) = dashboard.compare_year() {
        header.push_str(&format!("vs {} ", year));
    }
    header.push_str(&format!("[{}", dashboard.view_mode().label()));
    if dashboard.view_mode() == ViewMode::Export {
        header.push_str(&format!(", {}", dashboard.orientation()));
    }
    header.push_str("] ==");

    println!("{}", header);
    print!("{}", render::render_view(&dashboard.view(client.api_url())));
    println!("{}", dashboard.view_mode().caption());
}

/// Run the session until the user quits or stdin closes.
pub async fn run_session(client: StatsClient, years: YearRange) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let mut dashboard = Dashboard::new(years);

    info!("Dashboard session against {}", client.api_url());
    println!("{}", HELP);
    spawn_fetch(&client, &tx, dashboard.start());

    // stdin is read on a plain thread, outside the runtime
    let input_tx = tx.clone();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(Message::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Message::InputClosed);
    });

    while let Some(message) = rx.recv().await {
        match message {
            Message::Line(line) => match parse_input(&line) {
                Ok(Input::Event(event)) => match dashboard.handle(event) {
                    Ok(Some(ticket)) => {
                        spawn_fetch(&client, &tx, ticket);
                        draw(&dashboard, &client);
                    }
                    Ok(None) => draw(&dashboard, &client),
                    Err(e) => println!("{}", e),
                },
                Ok(Input::Show) => draw(&dashboard, &client),
                Ok(Input::Help) => println!("{}", HELP),
                Ok(Input::Quit) => break,
                Err(e) => println!("{} (type `help`)", e),
            },
            Message::Fetched(ticket, result) => match dashboard.apply(ticket, result) {
                Applied::Updated | Applied::Failed => draw(&dashboard, &client),
                Applied::Stale => debug!("Ignored stale response for {}", ticket.year),
            },
            Message::InputClosed => break,
        }
    }
    Ok(())
}
