mod include;
mod integration;
mod ipv6;
