fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect();
    glue_helper_cli::main(args)
}
