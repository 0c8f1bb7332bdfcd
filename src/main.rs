fn main() {
    ukelonn::run();
}
