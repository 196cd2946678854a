//! Say hello, then exit.

fn main() -> Result<(), rustix::io::Errno> {
    sailor::log::init();
    sailor::program::run()
}
