mod backtest_test;
mod e2e_test;
mod validation_test;
