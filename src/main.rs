//! Demo: a bordered list fed by a background log generator, two bordered text
//! panes and a vertical split. `j`/`k`/`g`/`G` navigate the list, `q` quits.

use std::time::Duration;

use anyhow::Context;
use crossterm::event::EventStream;
use tokio_stream::StreamExt;

use termpane::compositor::{Compositor, CompositorConfig};
use termpane::event::data::{self, DataSender};
use termpane::event::InputEvent;
use termpane::geometry::Rect;
use termpane::logging;
use termpane::render::Driver;
use termpane::widgets::{Axis, BorderedWidget, ListWidget, SplitWidget, TextWidget};

/// Index of the bordered list: it takes navigation keys and generator output.
const LIST: usize = 0;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CompositorConfig::from_env();
    let _log = logging::init(&config).context("setting up logging")?;
    logging::install_panic_hook();

    let result = run(config).await;
    if let Err(err) = &result {
        tracing::error!(target: "termpane", error = %format!("{err:#}"), "compositor failed");
    }
    result
}

async fn run(config: CompositorConfig) -> anyhow::Result<()> {
    let mut driver = Driver::new(config.mouse).context("opening terminal")?;
    driver.enter().context("entering alternate screen")?;

    let (tx, rx) = data::channel(config.data_capacity, LIST);
    tokio::spawn(feed(tx, config.feed_interval));

    let mut compositor = demo(config);
    let events = Box::pin(EventStream::new().filter_map(|event| match event {
        Ok(event) => InputEvent::from_crossterm(event).map(Ok),
        Err(err) => Some(Err(err)),
    }));
    compositor.run(&mut driver, events, rx).await?;

    driver.leave().context("restoring terminal")?;
    Ok(())
}

fn demo(config: CompositorConfig) -> Compositor {
    let list = ListWidget::new([
        "00000000",
        "111111111",
        "222222222",
        "333333333333333",
        "4444",
        "55555",
        "666666666",
        "777777777777",
        "888888888888",
        "999999999",
        "aaaa",
        "bbbbbbb",
        "cccccc",
        "dddddd",
    ])
    .with_selected(2);
    let text = TextWidget::new("abcdefghiklmnopqrstuvwxyzw");
    let symbols = TextWidget::new(
        "!@#$_+)+_)+_+_((*()&(*&(*(*()*()_)#%$%$$%^$^%$$##@#######%$_%^&*()_+{}:'>?()*()#&(!&(*&!!$&*<?",
    );
    let split = SplitWidget::new(
        TextWidget::new("LEFT".repeat(32)),
        TextWidget::new("RIGHT".repeat(24)),
        Axis::Vertical,
        25,
    );

    let mut compositor = Compositor::new(config).with_layout(|root: Rect| {
        vec![
            Rect::new(41, 0, root.x1, 20),
            Rect::new(0, 0, 40, 10),
            Rect::new(0, 21, root.x1, 25),
            Rect::new(0, 26, root.x1, root.y1),
        ]
    });
    let focus = compositor.push(BorderedWidget::new(list));
    compositor.push(BorderedWidget::new(text));
    compositor.push(BorderedWidget::new(symbols).with_title("title"));
    compositor.push(split);
    compositor.set_focus(focus);
    compositor
}

/// Emit alternating INFO/WARN lines until the compositor goes away.
async fn feed(tx: DataSender, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    // The first tick completes immediately.
    ticker.tick().await;
    for n in 0u64.. {
        ticker.tick().await;
        let level = if n % 2 == 0 { "INFO" } else { "WARN" };
        if !tx.send(format!("{level} {n}{n}{n}")).await {
            tracing::debug!(target: "termpane::feed", "compositor gone, stopping");
            break;
        }
    }
}
