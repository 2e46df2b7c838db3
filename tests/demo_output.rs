use debug_demo::run;

const EXPECTED: &str = "\
== C++ Debugger Demo ===
Factorial of 5 is: 120
Sum of vector: 150
Name: Ivan, Age: 21, Average: 87.5
Hello from C++!
Message length: 15
";

#[test]
fn run_prints_the_six_demo_lines() {
    let mut output = Vec::new();
    run(&mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, EXPECTED);
    assert_eq!(output.lines().count(), 6);
}

#[test]
fn run_surfaces_write_errors() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = run(&mut Broken).unwrap_err();
    assert_eq!(err.to_string(), "Failed to write banner");
}
