macro_rules! trace {
    ( @emit $token:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@emit: {:?}", $token);
    };

    ( @splice $at:expr, $count:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@splice: {} token(s) at #{}", $count, $at);
    };
}
