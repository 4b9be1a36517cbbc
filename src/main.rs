//! BWW Store - 电商后端 API
//!
//! - Domain: catalog/, account/, conversation/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, persistence

use std::sync::Arc;

use bww_store::config::{load_config, print_config};
use bww_store::infrastructure::http::{AppState, HttpServer, ServerConfig};
use bww_store::infrastructure::memory::InMemoryConversationStore;
use bww_store::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteProductRepository, SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},bww_store={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("BWW Store API");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = config
        .database
        .sqlite_file_path()
        .and_then(|path| std::path::Path::new(path).parent())
    {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库，失败则退出
    let db_config = DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| anyhow::anyhow!("Database connection error: {}", e))?;
    run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // 创建 Repository 适配器
    let product_repo = Arc::new(SqliteProductRepository::new(pool.clone()));
    let user_repo = Arc::new(SqliteUserRepository::new(pool));

    // 聊天历史（内存）
    let conversation_store = Arc::new(InMemoryConversationStore::new(config.chat.max_history));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(product_repo, user_repo, conversation_store);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
