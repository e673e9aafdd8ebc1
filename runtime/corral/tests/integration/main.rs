mod body;
mod path;
