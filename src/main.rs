fn main() -> Result<(), Box<dyn std::error::Error>> {
    dualsum_lib::run()
}
