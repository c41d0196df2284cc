fn main() {
    microcv_bin::main()
}
