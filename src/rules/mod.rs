pub(crate) mod chars;
pub(crate) mod prefix;
pub(crate) mod suffix;
