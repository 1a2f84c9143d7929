use othello_engine::protocol::protocol_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    env_logger::init();
    run_stdio_loop()
}
