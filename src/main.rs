use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use financial_planner::{
    app::{self, AppError},
    config,
    dashboard::DashboardInputs,
    investment::{self, InvestmentPlan, ProjectionStrategy},
    logging, payment,
    planning::{expenses::EXPENSE_BREAKDOWN, IncomeType},
    ui_cli,
};
use tracing::error;

/// 소득/지출 계획과 투자 성장 예측을 위한 CLI.
#[derive(Parser)]
#[command(name = "financial_planner_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project compound growth of an investment plan
    Project(ProjectArgs),
    /// Show advice for an income type
    Advice {
        #[arg(long, default_value = "salaried", value_parser = parse_income_type)]
        income_type: IncomeType,
    },
    /// Show the expense breakdown
    Expenses,
    /// Show investment suggestions and comparative plans
    Suggestions {
        #[arg(long, default_value = "salaried", value_parser = parse_income_type)]
        income_type: IncomeType,
    },
    /// Send a mock UPI payment (only prints a notification)
    Pay {
        #[arg(long)]
        upi_id: String,
    },
}

#[derive(clap::Args)]
struct ProjectArgs {
    /// Starting principal
    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,
    /// Amount added every month
    #[arg(long, default_value_t = 500.0, allow_negative_numbers = true)]
    monthly: f64,
    /// Whole number of years
    #[arg(long, default_value_t = 10.0)]
    years: f64,
    /// Expected annual return in percent
    #[arg(long, default_value_t = 7.0, allow_negative_numbers = true)]
    rate: f64,
    /// Series strategy (defaults to the config value)
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Incremental,
    Recompute,
}

impl From<StrategyArg> for ProjectionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Incremental => ProjectionStrategy::Incremental,
            StrategyArg::Recompute => ProjectionStrategy::Recompute,
        }
    }
}

fn parse_income_type(s: &str) -> Result<IncomeType, String> {
    s.parse()
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        // 설정 로드 실패 시에는 아직 구독자가 없다.
        logging::init(logging::DEFAULT_LEVEL);
        error!("{err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    logging::init(&cfg.logging.level);
    match cli.command {
        None => app::run(&mut cfg)?,
        Some(Commands::Project(args)) => run_project(args, &cfg)?,
        Some(Commands::Advice { income_type }) => {
            let inputs = DashboardInputs {
                income_type,
                ..DashboardInputs::from(&cfg.defaults)
            };
            ui_cli::handle_advice(&inputs);
        }
        Some(Commands::Expenses) => {
            println!("{}", ui_cli::expense_table(&EXPENSE_BREAKDOWN));
        }
        Some(Commands::Suggestions { income_type }) => {
            println!("{}", ui_cli::suggestion_table(investment::suggestions_for(income_type)));
            let base = DashboardInputs::from(&cfg.defaults).plan;
            let comparisons = investment::compare_plans(&base, cfg.projection.strategy)?;
            println!("{}", ui_cli::comparison_table(&comparisons));
        }
        Some(Commands::Pay { upi_id }) => {
            let id = payment::UpiId::parse(&upi_id)?;
            println!("{}", payment::initiate_payment(&id).notification);
        }
    }
    Ok(())
}

fn run_project(args: ProjectArgs, cfg: &config::Config) -> Result<(), AppError> {
    let years = investment::parse_years(args.years)?;
    if years > cfg.projection.max_years {
        return Err(AppError::InvalidArgument(format!(
            "at most {} years are supported (got {years})",
            cfg.projection.max_years
        )));
    }
    let plan = InvestmentPlan {
        initial_investment: args.initial,
        monthly_contribution: args.monthly,
        years,
        annual_return_percent: args.rate,
    };
    let strategy = args
        .strategy
        .map(ProjectionStrategy::from)
        .unwrap_or(cfg.projection.strategy);
    let projection = investment::project_with(&plan, strategy)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!("{}", ui_cli::projection_summary(&projection));
        if !projection.series.is_empty() {
            println!("{}", ui_cli::projection_table(&projection));
        }
    }
    Ok(())
}
