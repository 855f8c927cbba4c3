// Boots one login server per test binary and hands out its base URL.
use std::net::{SocketAddr, TcpStream};
use std::sync::{mpsc, OnceLock};
use std::time::Duration;

static BASE_URL: OnceLock<String> = OnceLock::new();

const READY_ATTEMPTS: usize = 100;
const READY_BACKOFF: Duration = Duration::from_millis(20);

pub fn ensure_server() -> &'static str {
    BASE_URL.get_or_init(|| {
        let addr = spawn_server();
        wait_until_accepting(addr);
        format!("http://{addr}")
    })
}

// The server runs on its own thread and runtime so it is not torn down
// with the runtime of the test that happened to start it.
fn spawn_server() -> SocketAddr {
    let (addr_tx, addr_rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral test port");
            addr_tx
                .send(listener.local_addr().expect("read bound address"))
                .expect("publish bound address");

            login_server::run(listener, login_server::ServerConfig::default())
                .await
                .expect("login server stopped with an error");
        });
    });

    addr_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("server thread never published its address")
}

fn wait_until_accepting(addr: SocketAddr) {
    for _ in 0..READY_ATTEMPTS {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(READY_BACKOFF);
    }

    panic!("login server at {addr} did not accept connections in time");
}
