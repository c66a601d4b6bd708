use clap::Parser;
use course_cart::config::cli::Command;
use course_cart::utils::logger;
use course_cart::{CartViewModel, CliConfig, ConfigProvider, CourseApi, HttpCourseApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_format());
    tracing::info!("Starting course-cart CLI");

    let api_config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("API config: {:?}", api_config);

    let api = HttpCourseApi::new(&api_config)?;
    let mut view_model = CartViewModel::new(api).with_cart_sync(api_config.sync_cart());

    // 載入課程目錄
    if !view_model.fetch_courses().await {
        exit_with_error(&view_model);
    }

    match cli.command {
        Command::List { search, sort, desc } => {
            view_model.set_search_query(search);
            view_model.sort_courses(sort);
            if desc {
                view_model.toggle_sort_order();
            }

            let courses = view_model.filtered_courses();
            tracing::info!("📚 {} of {} courses match", courses.len(), view_model.courses().len());
            for course in courses {
                println!(
                    "{:<26} {:<28} {:<16} {:>8} {:>4} seats",
                    course.id, course.title, course.location, course.price, course.spaces_available
                );
            }
        }
        Command::Checkout {
            name,
            phone,
            courses,
        } => {
            for course_id in &courses {
                if !view_model.add_to_cart(course_id).await {
                    tracing::warn!("⚠️ Course {} is unknown or full, skipped", course_id);
                }
            }
            if let Some(message) = view_model.error() {
                eprintln!("⚠️ {}", message);
            }

            view_model.set_name(name);
            view_model.set_phone(phone);
            if !view_model.checkout().await {
                exit_with_error(&view_model);
            }

            println!(
                "✅ {}",
                view_model.success_message().unwrap_or("Order placed")
            );
        }
    }

    Ok(())
}

fn exit_with_error<A: CourseApi>(view_model: &CartViewModel<A>) -> ! {
    let message = view_model.error().unwrap_or("Unknown error");
    tracing::error!("❌ {}", message);
    eprintln!("❌ {}", message);
    std::process::exit(1);
}
