mod support;

mod api;
mod poller;
mod submissions;
