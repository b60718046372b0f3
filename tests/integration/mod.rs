mod alerting;
mod classification;
