use order_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    print_banner();

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 加载菜单，初始化服务器状态 (菜单错误时直接退出)
    let state = match ServerState::initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(path = %config.menu_path.display(), error = %e, "Failed to load menu");
            return Err(e.into());
        }
    };

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
