use env_logger::Builder;
use log::Level;
use std::io::Write;

pub fn init_logger() {
   Builder::new()
   .filter_level(log::LevelFilter::Info)
   .parse_default_env()
   .format(|buf, record| {
      let color_level = match record.level() {
         Level::Error => "\x1b[31;1m",
         Level::Warn => "\x1b[33;1m",
         Level::Info => "\x1b[32;1m",
         Level::Debug => "\x1b[34;1m",
         Level::Trace => "\x1b[35;1m",
      };
      writeln!(buf, "{}{} [{}] - {}\x1b[0m", color_level, record.level(), record.target(), record.args())
   })
   .init()
}
