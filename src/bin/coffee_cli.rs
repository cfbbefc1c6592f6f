use std::{process::ExitCode, sync::Arc};

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Args, Parser, Subcommand};
use coffee_supply_client::{
    client::{Anonymous, ApiClient, StaticToken, TokenProvider},
    config::{self, ClientConfig},
    dashboard::Section,
    display::{
        format_currency, format_date, format_datetime, format_quantity, stage_label, Locale,
        StatusDisplay,
    },
    errors::ClientError,
    filters::{newest_first, CropSeasonFilter, InboundRequestFilter, ShipmentFilter},
    forms::{
        BusinessProfileForm, CropProgressForm, CropSeasonForm, FarmerReportForm, LoginForm,
        ProcessingBatchForm, UpdateDeliveryStatusForm, WarehouseInboundRequestForm,
    },
    models::{
        BusinessProfile, CropSeason, CropSeasonStatus, CropStage, InboundRequestStatus, Order, ProcessingBatch,
        ReportType, SeverityLevel, Shipment, UserRole, WarehouseInboundRequest,
    },
    services::ServiceContainer,
    workflow::{next_stage_for_detail, DeliveryStatus},
};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            match err.downcast_ref::<ClientError>() {
                Some(client_err) => eprintln!("Error: {}", client_err.user_message()),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let context = CliContext::initialize(&cli.global)?;
    let json = cli.global.json;

    match cli.command {
        Commands::Auth(command) => handle_auth_command(&context, command, json).await,
        Commands::Shipments(command) => handle_shipments_command(&context, command, json).await,
        Commands::Seasons(command) => handle_seasons_command(&context, command, json).await,
        Commands::Progress(command) => handle_progress_command(&context, command, json).await,
        Commands::Reports(command) => handle_reports_command(&context, command, json).await,
        Commands::Batches(command) => handle_batches_command(&context, command, json).await,
        Commands::Inbound(command) => handle_inbound_command(&context, command, json).await,
        Commands::Orders(command) => handle_orders_command(&context, command, json).await,
        Commands::Profile(command) => handle_profile_command(&context, command, json).await,
        Commands::Dashboard => handle_dashboard(&context, json),
    }
}

#[derive(Parser)]
#[command(
    name = "coffee-cli",
    about = "Command-line client for the coffee supply-chain backend",
    version
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON when available"
    )]
    json: bool,
    #[arg(long, global = true, help = "Bearer token; defaults to APP__ACCESS_TOKEN")]
    token: Option<String>,
    #[arg(long, global = true, help = "Signed-in role, used to hide actions it cannot take")]
    role: Option<UserRole>,
    #[arg(long, global = true, help = "Output language: vi or en")]
    locale: Option<Locale>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    Auth(AuthCommands),
    #[command(subcommand)]
    Shipments(ShipmentsCommands),
    #[command(subcommand)]
    Seasons(SeasonsCommands),
    #[command(subcommand)]
    Progress(ProgressCommands),
    #[command(subcommand)]
    Reports(ReportsCommands),
    #[command(subcommand)]
    Batches(BatchesCommands),
    #[command(subcommand)]
    Inbound(InboundCommands),
    #[command(subcommand)]
    Orders(OrdersCommands),
    #[command(subcommand)]
    Profile(ProfileCommands),
    /// Sections and actions available to --role
    Dashboard,
}

#[derive(Subcommand)]
enum AuthCommands {
    Login(AuthLoginArgs),
}

#[derive(Args)]
struct AuthLoginArgs {
    #[arg(long, help = "Email address for the account")]
    email: String,
    #[arg(long, help = "Password for the account")]
    password: String,
}

#[derive(Subcommand)]
enum ShipmentsCommands {
    List(ListShipmentsArgs),
    Get(IdArg),
    UpdateStatus(UpdateStatusArgs),
    /// Statuses a shipment in STATUS may move to
    Transitions(TransitionsArgs),
}

#[derive(Args)]
struct ListShipmentsArgs {
    #[arg(long, value_parser = parse_delivery_status)]
    status: Option<DeliveryStatus>,
    #[arg(long, help = "Match shipment or order code")]
    search: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, help = "Only shipments assigned to me")]
    assigned: bool,
}

#[derive(Args)]
struct IdArg {
    id: Uuid,
}

#[derive(Args)]
struct UpdateStatusArgs {
    id: Uuid,
    #[arg(value_parser = parse_delivery_status)]
    status: DeliveryStatus,
    #[arg(long)]
    note: Option<String>,
}

#[derive(Args)]
struct TransitionsArgs {
    #[arg(value_parser = parse_delivery_status)]
    status: DeliveryStatus,
}

#[derive(Subcommand)]
enum SeasonsCommands {
    List(ListSeasonsArgs),
    Get(IdArg),
    Create(CreateSeasonArgs),
}

#[derive(Args)]
struct ListSeasonsArgs {
    #[arg(long)]
    status: Option<CropSeasonStatus>,
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args)]
struct CreateSeasonArgs {
    #[arg(long)]
    name: String,
    #[arg(long, help = "Start date, YYYY-MM-DD")]
    start: NaiveDate,
    #[arg(long, help = "End date, YYYY-MM-DD")]
    end: NaiveDate,
    #[arg(long, help = "Area in hectares")]
    area: Option<f64>,
    #[arg(long)]
    note: Option<String>,
}

#[derive(Subcommand)]
enum ProgressCommands {
    /// Stage definitions in growing order
    Stages,
    List(DetailArg),
    Next(DetailArg),
    Record(RecordProgressArgs),
}

#[derive(Args)]
struct DetailArg {
    #[arg(help = "Crop-season detail id")]
    detail: Uuid,
}

#[derive(Args)]
struct RecordProgressArgs {
    #[arg(long)]
    detail: Uuid,
    #[arg(long)]
    stage: Uuid,
    #[arg(long, help = "Progress date, YYYY-MM-DD; defaults to today")]
    date: Option<NaiveDate>,
    #[arg(long = "yield", help = "Actual yield in kg, required at harvest")]
    actual_yield: Option<f64>,
    #[arg(long)]
    note: Option<String>,
    #[arg(long)]
    photo_url: Option<String>,
    #[arg(long)]
    video_url: Option<String>,
}

#[derive(Subcommand)]
enum ReportsCommands {
    List,
    Create(CreateReportArgs),
}

#[derive(Args)]
struct CreateReportArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long = "type", help = "Crop or Processing")]
    report_type: ReportType,
    #[arg(long)]
    severity: Option<SeverityLevel>,
    #[arg(long)]
    crop_progress: Option<Uuid>,
    #[arg(long)]
    processing_progress: Option<Uuid>,
    #[arg(long)]
    image_url: Option<String>,
}

#[derive(Subcommand)]
enum BatchesCommands {
    List,
    Get(IdArg),
    Create(CreateBatchArgs),
}

#[derive(Args)]
struct CreateBatchArgs {
    #[arg(long)]
    season: Uuid,
    #[arg(long)]
    coffee_type: Uuid,
    #[arg(long)]
    method: i32,
    #[arg(long)]
    quantity: f64,
    #[arg(long, default_value = "kg")]
    unit: String,
}

#[derive(Subcommand)]
enum InboundCommands {
    List(ListInboundArgs),
    Create(CreateInboundArgs),
    Cancel(IdArg),
}

#[derive(Args)]
struct ListInboundArgs {
    #[arg(long)]
    status: Option<InboundRequestStatus>,
}

#[derive(Args)]
struct CreateInboundArgs {
    #[arg(long)]
    batch: Uuid,
    #[arg(long)]
    quantity: f64,
    #[arg(long, help = "Preferred delivery date, YYYY-MM-DD")]
    date: Option<NaiveDate>,
    #[arg(long)]
    note: Option<String>,
}

#[derive(Subcommand)]
enum OrdersCommands {
    List,
    Get(IdArg),
}

#[derive(Subcommand)]
enum ProfileCommands {
    Show,
    Update(ProfileUpdateArgs),
}

#[derive(Args)]
struct ProfileUpdateArgs {
    #[arg(long)]
    company_name: String,
    #[arg(long, help = "10 digits, or 13 with a branch suffix")]
    tax_id: String,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    website: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

fn parse_delivery_status(raw: &str) -> Result<DeliveryStatus, String> {
    DeliveryStatus::parse_known(raw).ok_or_else(|| {
        let known: Vec<String> = DeliveryStatus::KNOWN.iter().map(|s| s.to_string()).collect();
        format!("unknown delivery status '{}'; expected one of {}", raw, known.join(", "))
    })
}

struct CliContext {
    locale: Locale,
    role: Option<UserRole>,
    services: ServiceContainer,
}

impl CliContext {
    fn initialize(args: &GlobalArgs) -> Result<Self> {
        let config: ClientConfig =
            config::load_config().context("failed to load client config")?;
        // load_config logs before any subscriber exists
        config::init_tracing(&config.log_level, config.log_json);
        info!(environment = %config::run_env(), base_url = %config.base_url, "configuration loaded");
        debug!(config = ?config, "effective configuration");

        let token = args.token.clone().or_else(|| config.access_token.clone());
        let tokens: Arc<dyn TokenProvider> = match token {
            Some(token) => Arc::new(StaticToken::new(token)),
            None => Arc::new(Anonymous),
        };
        let client = ApiClient::from_config(&config, tokens)?;

        Ok(Self {
            locale: args.locale.unwrap_or(config.locale),
            role: args.role,
            services: ServiceContainer::new(Arc::new(client), args.role),
        })
    }
}

async fn handle_auth_command(context: &CliContext, command: AuthCommands, json: bool) -> Result<()> {
    match command {
        AuthCommands::Login(args) => {
            let login = context
                .services
                .auth
                .login(&LoginForm {
                    email: args.email,
                    password: args.password,
                })
                .await?;
            if json {
                print_json(&login)?;
            } else {
                println!(
                    "Signed in as {} ({})",
                    login.full_name.as_deref().unwrap_or("—"),
                    login.role.label(context.locale)
                );
                println!("Access token: {}", login.access_token);
            }
            Ok(())
        }
    }
}

async fn handle_shipments_command(
    context: &CliContext,
    command: ShipmentsCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.shipments;
    match command {
        ShipmentsCommands::List(args) => {
            let mut shipments = if args.assigned {
                service.list_assigned().await?
            } else {
                service.list(args.status).await?
            };
            newest_first(&mut shipments, |s| s.created_at);
            let filter = ShipmentFilter {
                status: args.status,
                search: args.search,
            };
            let visible = filter.apply(&shipments);
            if json {
                print_json(&visible)?;
            } else {
                println!("Shipments: {}", visible.len());
                for shipment in visible {
                    render_shipment(shipment, context.locale);
                }
            }
            Ok(())
        }
        ShipmentsCommands::Get(args) => {
            let shipment = service.get(args.id).await?;
            if json {
                print_json(&shipment)?;
            } else {
                render_shipment(&shipment, context.locale);
                for detail in &shipment.shipment_details {
                    println!(
                        "  • {} {}",
                        detail.product_name.as_deref().unwrap_or("—"),
                        format_quantity(
                            detail.quantity,
                            detail.unit.as_deref().unwrap_or("kg"),
                            context.locale
                        )
                    );
                }
                render_transitions(shipment.delivery_status, context.locale);
            }
            Ok(())
        }
        ShipmentsCommands::UpdateStatus(args) => {
            let shipment = service.get(args.id).await?;
            let mut form = UpdateDeliveryStatusForm::to(args.status);
            form.note = args.note;
            if args.status == DeliveryStatus::Delivered {
                form.received_at = Some(Local::now().naive_local());
            }
            let updated = service
                .update_status(&shipment, &form)
                .await
                .with_context(|| format!("failed to update shipment {}", args.id))?;
            if json {
                print_json(&updated)?;
            } else {
                println!(
                    "Shipment {} is now {}",
                    updated.shipment_code,
                    updated.delivery_status.label(context.locale)
                );
            }
            Ok(())
        }
        ShipmentsCommands::Transitions(args) => {
            if json {
                print_json(&args.status.allowed_next())?;
            } else {
                render_transitions(args.status, context.locale);
            }
            Ok(())
        }
    }
}

async fn handle_seasons_command(
    context: &CliContext,
    command: SeasonsCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.crop_seasons;
    match command {
        SeasonsCommands::List(args) => {
            let mut seasons = service.list().await?;
            newest_first(&mut seasons, |s| s.created_at);
            let filter = CropSeasonFilter {
                status: args.status,
                search: args.search,
            };
            let visible = filter.apply(&seasons);
            if json {
                print_json(&visible)?;
            } else {
                println!("Crop seasons: {}", visible.len());
                for season in visible {
                    render_season(season, context.locale);
                }
            }
            Ok(())
        }
        SeasonsCommands::Get(args) => {
            let season = service.get(args.id).await?;
            if json {
                print_json(&season)?;
            } else {
                render_season(&season, context.locale);
                for detail in &season.details {
                    println!(
                        "  • {} {} • {} – {} • {}",
                        detail.detail_id,
                        detail.coffee_type_name.as_deref().unwrap_or("—"),
                        format_date(detail.expected_harvest_start),
                        format_date(detail.expected_harvest_end),
                        detail
                            .estimated_yield
                            .map(|y| format_quantity(y, "kg", context.locale))
                            .unwrap_or_else(|| "—".to_string())
                    );
                }
            }
            Ok(())
        }
        SeasonsCommands::Create(args) => {
            let season = service
                .create(&CropSeasonForm {
                    season_name: args.name,
                    start_date: args.start,
                    end_date: args.end,
                    area: args.area,
                    note: args.note,
                })
                .await?;
            if json {
                print_json(&season)?;
            } else {
                println!("Created crop season {}", season.crop_season_id);
            }
            Ok(())
        }
    }
}

async fn handle_progress_command(
    context: &CliContext,
    command: ProgressCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.crop_progress;
    match command {
        ProgressCommands::Stages => {
            let mut stages = service.stages().await?;
            stages.sort_by_key(|s| s.order_index);
            if json {
                print_json(&stages)?;
            } else {
                for stage in &stages {
                    render_stage(stage, context.locale);
                }
            }
            Ok(())
        }
        ProgressCommands::List(args) => {
            let progress = service.list_for_detail(args.detail).await?;
            if json {
                print_json(&progress)?;
            } else {
                for entry in &progress {
                    println!(
                        "- {} • {} • {}",
                        entry
                            .stage_code
                            .as_deref()
                            .map(|code| stage_label(code, context.locale))
                            .unwrap_or_else(|| entry.stage_id.to_string()),
                        format_date(entry.progress_date),
                        entry.note.as_deref().unwrap_or("")
                    );
                }
            }
            Ok(())
        }
        ProgressCommands::Next(args) => {
            let stages = service.stages().await?;
            let progress = service.list_for_detail(args.detail).await?;
            let next = next_stage_for_detail(&stages, &progress, args.detail)
                .map_err(ClientError::from)?;
            if json {
                print_json(&next.stage())?;
            } else {
                match next.stage() {
                    Some(stage) => {
                        print!("Next stage: ");
                        render_stage(stage, context.locale);
                    }
                    None => println!("All stages recorded"),
                }
            }
            Ok(())
        }
        ProgressCommands::Record(args) => {
            let form = CropProgressForm {
                crop_season_detail_id: args.detail,
                stage_id: Some(args.stage),
                progress_date: Some(args.date.unwrap_or_else(|| Local::now().date_naive())),
                actual_yield: args.actual_yield,
                note: args.note,
                photo_url: args.photo_url,
                video_url: args.video_url,
            };
            let recorded = service.record(&form).await?;
            if json {
                print_json(&recorded)?;
            } else {
                println!("Recorded progress {}", recorded.progress_id);
            }
            Ok(())
        }
    }
}

async fn handle_reports_command(
    context: &CliContext,
    command: ReportsCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.farmer_reports;
    match command {
        ReportsCommands::List => {
            let mut reports = service.list().await?;
            newest_first(&mut reports, |r| r.reported_at);
            if json {
                print_json(&reports)?;
            } else {
                for report in &reports {
                    println!(
                        "- {} • {} • {} • {}",
                        report.report_code.as_deref().unwrap_or("—"),
                        report.title,
                        report
                            .severity_level
                            .map(|s| s.label(context.locale))
                            .unwrap_or("—"),
                        format_datetime(report.reported_at)
                    );
                }
            }
            Ok(())
        }
        ReportsCommands::Create(args) => {
            let report = service
                .create(&FarmerReportForm {
                    title: args.title,
                    description: args.description,
                    report_type: args.report_type,
                    severity_level: args.severity,
                    crop_progress_id: args.crop_progress,
                    processing_progress_id: args.processing_progress,
                    image_url: args.image_url,
                    video_url: None,
                })
                .await?;
            if json {
                print_json(&report)?;
            } else {
                println!("Submitted report {}", report.report_id);
            }
            Ok(())
        }
    }
}

async fn handle_batches_command(
    context: &CliContext,
    command: BatchesCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.processing_batches;
    match command {
        BatchesCommands::List => {
            let mut batches = service.list().await?;
            newest_first(&mut batches, |b| b.created_at);
            if json {
                print_json(&batches)?;
            } else {
                for batch in &batches {
                    render_batch(batch, context.locale);
                }
            }
            Ok(())
        }
        BatchesCommands::Get(args) => {
            let batch = service.get(args.id).await?;
            if json {
                print_json(&batch)?;
            } else {
                render_batch(&batch, context.locale);
            }
            Ok(())
        }
        BatchesCommands::Create(args) => {
            let batch = service
                .create(&ProcessingBatchForm {
                    crop_season_id: Some(args.season),
                    coffee_type_id: Some(args.coffee_type),
                    method_id: Some(args.method),
                    input_quantity: args.quantity,
                    input_unit: args.unit,
                })
                .await?;
            if json {
                print_json(&batch)?;
            } else {
                println!("Created batch {} ({})", batch.batch_code, batch.batch_id);
            }
            Ok(())
        }
    }
}

async fn handle_inbound_command(
    context: &CliContext,
    command: InboundCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.warehouse_requests;
    match command {
        InboundCommands::List(args) => {
            let mut requests = service.list().await?;
            newest_first(&mut requests, |r| r.created_at);
            let visible = InboundRequestFilter {
                status: args.status,
            }
            .apply(&requests);
            if json {
                print_json(&visible)?;
            } else {
                for request in visible {
                    render_inbound(request, context.locale);
                }
            }
            Ok(())
        }
        InboundCommands::Create(args) => {
            let request = service
                .create(&WarehouseInboundRequestForm {
                    batch_id: Some(args.batch),
                    requested_quantity: args.quantity,
                    preferred_delivery_date: args.date,
                    note: args.note,
                })
                .await?;
            if json {
                print_json(&request)?;
            } else {
                println!("Submitted inbound request {}", request.inbound_request_id);
            }
            Ok(())
        }
        InboundCommands::Cancel(args) => {
            let request = service.get(args.id).await?;
            service
                .cancel(&request)
                .await
                .with_context(|| format!("failed to cancel inbound request {}", args.id))?;
            if !json {
                println!("Cancelled inbound request {}", args.id);
            }
            Ok(())
        }
    }
}

async fn handle_orders_command(
    context: &CliContext,
    command: OrdersCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.orders;
    match command {
        OrdersCommands::List => {
            let mut orders = service.list().await?;
            newest_first(&mut orders, |o| o.order_date);
            if json {
                print_json(&orders)?;
            } else {
                for order in &orders {
                    render_order(order, context.locale);
                }
            }
            Ok(())
        }
        OrdersCommands::Get(args) => {
            let order = service.get(args.id).await?;
            if json {
                print_json(&order)?;
            } else {
                render_order(&order, context.locale);
                for item in &order.order_items {
                    println!(
                        "  • {} x {} @ {}",
                        format_quantity(item.quantity, "kg", context.locale),
                        item.product_name.as_deref().unwrap_or("—"),
                        item.unit_price
                            .map(|p| format_currency(p, context.locale))
                            .unwrap_or_else(|| "—".to_string())
                    );
                }
            }
            Ok(())
        }
    }
}

async fn handle_profile_command(
    context: &CliContext,
    command: ProfileCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.profile;
    let profile = match command {
        ProfileCommands::Show => service.business_profile().await?,
        ProfileCommands::Update(args) => {
            let form = BusinessProfileForm {
                company_name: args.company_name,
                position: args.position,
                company_address: args.address,
                tax_id: args.tax_id,
                website: args.website,
                contact_email: args.email,
                phone_number: args.phone,
            };
            service.update_business_profile(&form).await?
        }
    };
    if json {
        print_json(&profile)?;
    } else {
        render_profile(&profile);
    }
    Ok(())
}

fn handle_dashboard(context: &CliContext, json: bool) -> Result<()> {
    let role = context
        .role
        .ok_or_else(|| anyhow!("pass --role to choose whose dashboard to show"))?;
    let dashboard = role
        .dashboard()
        .ok_or_else(|| anyhow!("no dashboard is configured for role {}", role))?;
    if json {
        print_json(dashboard)?;
    } else {
        println!("Dashboard for {}", role.label(context.locale));
        let sections: Vec<String> = role.sections().iter().map(Section::to_string).collect();
        println!("Sections: {}", sections.join(", "));
        println!("Permissions: {}", dashboard.permissions.join(", "));
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_shipment(shipment: &Shipment, locale: Locale) {
    println!(
        "- Shipment {} • order {} • {} • {} • shipped {}",
        shipment.shipment_code,
        shipment.order_code,
        shipment.delivery_status.label(locale),
        format_quantity(shipment.shipped_quantity, "kg", locale),
        format_datetime(shipment.shipped_at)
    );
}

fn render_profile(profile: &BusinessProfile) {
    println!("{} • tax id {}", profile.company_name, profile.tax_id);
    for (label, value) in [
        ("Position", &profile.position),
        ("Address", &profile.company_address),
        ("Website", &profile.website),
        ("Email", &profile.contact_email),
        ("Phone", &profile.phone_number),
    ] {
        if let Some(value) = value {
            println!("  {}: {}", label, value);
        }
    }
}

fn render_transitions(status: DeliveryStatus, locale: Locale) {
    let next: Vec<&str> = status.allowed_next().iter().map(|s| s.label(locale)).collect();
    if next.is_empty() {
        println!("No further status changes from {}", status.label(locale));
    } else {
        println!("Can move to: {}", next.join(", "));
    }
}

fn render_season(season: &CropSeason, locale: Locale) {
    println!(
        "- {} {} • {} • {} – {} • {}",
        season.season_code.as_deref().unwrap_or("—"),
        season.season_name,
        season.status.label(locale),
        format_date(Some(season.start_date)),
        format_date(Some(season.end_date)),
        season
            .area
            .map(|a| format_quantity(a, "ha", locale))
            .unwrap_or_else(|| "—".to_string())
    );
}

fn render_stage(stage: &CropStage, locale: Locale) {
    println!(
        "{}. {} ({}) {}",
        stage.order_index,
        stage_label(&stage.stage_code, locale),
        stage.stage_code,
        stage.stage_id
    );
}

fn render_batch(batch: &ProcessingBatch, locale: Locale) {
    println!(
        "- Batch {} • {} • {} • {}",
        batch.batch_code,
        batch.method_name.as_deref().unwrap_or("—"),
        format_quantity(
            batch.input_quantity,
            batch.input_unit.as_deref().unwrap_or("kg"),
            locale
        ),
        batch.status.label(locale)
    );
}

fn render_inbound(request: &WarehouseInboundRequest, locale: Locale) {
    println!(
        "- {} • batch {} • {} • deliver {} • {}",
        request
            .inbound_request_code
            .as_deref()
            .unwrap_or("—"),
        request.batch_code.as_deref().unwrap_or("—"),
        format_quantity(request.requested_quantity, "kg", locale),
        format_date(request.preferred_delivery_date),
        request.status.label(locale)
    );
}

fn render_order(order: &Order, locale: Locale) {
    println!(
        "- Order {} • {} • {} • {}",
        order.order_code,
        order.buyer_name.as_deref().unwrap_or("—"),
        order
            .total_amount
            .map(|a| format_currency(a, locale))
            .unwrap_or_else(|| "—".to_string()),
        order.status.label(locale)
    );
}
