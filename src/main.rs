mod api;
mod app;
mod cli;
mod client;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod theme;
mod ui;
mod view;

use std::cell::RefCell;
use std::io;
use std::panic;
use std::process;
use std::rc::Rc;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use api::HttpTodoApi;
use app::App;
use cli::{Cli, Commands};
use client::TaskListClient;
use storage::config::{ApiConfig, Config};
use theme::{get_theme_colors, Theme};

/// Header 中显示的账户，如 "bob @ playground.4geeks.com"
fn account_label(api: &ApiConfig) -> String {
    let host = url::Url::parse(&api.base_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| api.base_url.clone());
    format!("{} @ {}", api.username, host)
}

/// 启动 TUI 界面
fn run_tui(config: &Config, api: HttpTodoApi) -> io::Result<()> {
    let theme = Theme::from_name(&config.theme.name);
    let account = account_label(&config.api);

    // 初始化终端
    let terminal = Rc::new(RefCell::new(ratatui::init()));
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e);
    }

    let mut client = TaskListClient::new(api);

    // 请求期间画同步提示（调用在 UI 线程上阻塞）
    {
        let terminal = Rc::clone(&terminal);
        let colors = get_theme_colors(theme);
        let account = account.clone();
        client.subscribe(move |state| {
            if !state.loading {
                return;
            }
            if let Ok(mut terminal) = terminal.try_borrow_mut() {
                let _ = terminal.draw(|frame| ui::todo_list::render_loading(frame, &account, &colors));
            }
        });
    }

    let mut app = App::new(client, theme, account);
    app.start();

    // 运行主循环
    let result = run(&terminal, &mut app);

    // 恢复终端
    let released = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result.and(released)
}

fn run(terminal: &RefCell<DefaultTerminal>, app: &mut App<HttpTodoApi>) -> io::Result<()> {
    loop {
        app.click_areas.reset();
        terminal
            .borrow_mut()
            .draw(|frame| ui::todo_list::render(frame, app))?;

        if !event::handle_events(app)? {
            return Ok(());
        }
    }
}

/// 一次性命令，失败时以非零状态退出
fn run_command(api: HttpTodoApi, command: &Commands) -> io::Result<()> {
    let mut client = TaskListClient::new(api);
    let ok = cli::tasks::execute(&mut client, command, &mut io::stdout().lock())?;
    if !ok {
        process::exit(1);
    }
    Ok(())
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    let config_path = storage::config::config_path();
    let first_run = !config_path.exists();
    let loaded = storage::config::load_config();
    let mut config = loaded.as_ref().cloned().unwrap_or_default();

    if let Some(path) = logging::init(&config.log) {
        tracing::info!(log = %path.display(), "todos starting");
    }
    // 日志就绪后再报告配置错误
    if let Err(e) = &loaded {
        tracing::warn!("ignoring unreadable config {}: {}", config_path.display(), e);
    }

    // 首次运行写出默认配置，便于用户修改
    if first_run {
        match storage::config::save_config(&config) {
            Ok(()) => tracing::info!(path = %config_path.display(), "wrote default config"),
            Err(e) => tracing::warn!("failed to write default config: {}", e),
        }
    }

    config.api = config.api.with_overrides(cli.base_url, cli.username);

    let api = match HttpTodoApi::new(&config.api) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };
    tracing::info!(base_url = %config.api.base_url, username = api.username(), "using collection");

    // 统一调度
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(&config, api),
        command => run_command(api, &command),
    }
}
